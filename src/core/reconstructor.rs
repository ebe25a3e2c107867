//! Pairs each user's entrances with the next exit to rebuild sessions.

use crate::models::{action::Action, event::Event, session::Session};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Sessions keyed by user, in lexicographic user order.
pub type SessionsByUser = BTreeMap<String, Vec<Session>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairingState {
    AwaitingEntrance,
    AwaitingExit(NaiveDateTime),
}

/// Sessions of a single user plus what the scan had to throw away.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub sessions: Vec<Session>,
    /// Entrance still waiting for an exit when the events ran out.
    pub dangling: Option<NaiveDateTime>,
    /// Exits seen with no entrance pending.
    pub orphan_exits: usize,
    /// Entrances seen while an earlier entrance was still open.
    pub repeated_entrances: usize,
}

/// Result of [`reconstruct_all`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSet {
    pub by_user: SessionsByUser,
    pub dangling_entrances: usize,
    pub orphan_exits: usize,
    pub repeated_entrances: usize,
}

impl SessionSet {
    pub fn session_count(&self) -> usize {
        self.by_user.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

/// Rebuild the sessions of one user from events sorted by timestamp.
///
/// The first entrance of a run is held until an exit shows up; further
/// entrances in between are ignored. Exits with nothing open are skipped.
pub fn reconstruct_sessions<'a, I>(events: I) -> Reconstruction
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut out = Reconstruction::default();
    let mut state = PairingState::AwaitingEntrance;

    for ev in events {
        state = match (state, ev.action) {
            (PairingState::AwaitingEntrance, Action::Entrance) => {
                PairingState::AwaitingExit(ev.timestamp)
            }
            (PairingState::AwaitingEntrance, Action::Exit) => {
                out.orphan_exits += 1;
                PairingState::AwaitingEntrance
            }
            (PairingState::AwaitingExit(entry), Action::Entrance) => {
                out.repeated_entrances += 1;
                PairingState::AwaitingExit(entry)
            }
            (PairingState::AwaitingExit(entry), Action::Exit) => {
                out.sessions.push(Session::new(entry, ev.timestamp));
                PairingState::AwaitingEntrance
            }
        };
    }

    if let PairingState::AwaitingExit(entry) = state {
        out.dangling = Some(entry);
    }

    out
}

/// Split a time-ordered event stream by user and rebuild each user's
/// sessions independently. Users left without any session are not kept.
pub fn reconstruct_all(events: &[Event]) -> SessionSet {
    let mut per_user: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for ev in events {
        per_user.entry(ev.user.as_str()).or_default().push(ev);
    }

    let mut set = SessionSet::default();

    for (user, user_events) in per_user {
        let rec = reconstruct_sessions(user_events);

        set.orphan_exits += rec.orphan_exits;
        set.repeated_entrances += rec.repeated_entrances;

        if let Some(entry) = rec.dangling {
            // still clocked in, or a lost exit swipe: no session is produced
            set.dangling_entrances += 1;
            tracing::warn!(
                user,
                entry = %entry.format("%Y-%m-%d %H:%M"),
                "entrance without a following exit dropped"
            );
        }

        if rec.sessions.is_empty() {
            tracing::debug!(user, "no complete session, user skipped");
            continue;
        }

        set.by_user.insert(user.to_string(), rec.sessions);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn ev(user: &str, h: u32, m: u32, action: Action) -> Event {
        Event::new(user, at(h, m), action)
    }

    #[test]
    fn pairs_each_entrance_with_next_exit() {
        let events = vec![
            ev("U1", 9, 0, Action::Entrance),
            ev("U1", 12, 0, Action::Exit),
            ev("U1", 13, 0, Action::Entrance),
            ev("U1", 17, 0, Action::Exit),
        ];

        let rec = reconstruct_sessions(&events);

        assert_eq!(
            rec.sessions,
            vec![
                Session::new(at(9, 0), at(12, 0)),
                Session::new(at(13, 0), at(17, 0)),
            ]
        );
        assert_eq!(rec.dangling, None);
    }

    #[test]
    fn lone_entrance_yields_nothing() {
        let events = vec![ev("U1", 9, 0, Action::Entrance)];

        let rec = reconstruct_sessions(&events);

        assert!(rec.sessions.is_empty());
        assert_eq!(rec.dangling, Some(at(9, 0)));
    }

    #[test]
    fn leading_exits_are_skipped() {
        let events = vec![ev("U1", 8, 0, Action::Exit), ev("U1", 8, 5, Action::Exit)];

        let rec = reconstruct_sessions(&events);

        assert!(rec.sessions.is_empty());
        assert_eq!(rec.orphan_exits, 2);
    }

    #[test]
    fn repeated_entrance_keeps_the_first_one() {
        let events = vec![
            ev("U1", 9, 0, Action::Entrance),
            ev("U1", 9, 30, Action::Entrance),
            ev("U1", 11, 0, Action::Exit),
            ev("U1", 11, 10, Action::Exit),
        ];

        let rec = reconstruct_sessions(&events);

        assert_eq!(rec.sessions, vec![Session::new(at(9, 0), at(11, 0))]);
        assert_eq!(rec.repeated_entrances, 1);
        assert_eq!(rec.orphan_exits, 1);
    }

    #[test]
    fn users_are_reconstructed_independently() {
        let events = vec![
            ev("U1", 9, 0, Action::Entrance),
            ev("U2", 9, 15, Action::Entrance),
            ev("U1", 10, 0, Action::Exit),
            ev("U2", 11, 0, Action::Exit),
            ev("U3", 12, 0, Action::Entrance),
        ];

        let set = reconstruct_all(&events);

        assert_eq!(set.by_user.len(), 2);
        assert_eq!(set.by_user["U1"], vec![Session::new(at(9, 0), at(10, 0))]);
        assert_eq!(set.by_user["U2"], vec![Session::new(at(9, 15), at(11, 0))]);
        assert_eq!(set.dangling_entrances, 1);
        assert_eq!(set.session_count(), 2);
    }
}
