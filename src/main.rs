//! infloor main entrypoint.

use infloor::run;
use infloor::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
