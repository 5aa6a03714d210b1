use chrono::{Month, NaiveDate};

/// The three kinds of change a calendar reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum EventKind {
    /// The user clicked a day.
    DateSelected,

    /// The user picked another month.
    MonthSelected,

    /// The user picked another year.
    YearSelected,
}

impl EventKind {
    pub const ALL: [Self; 3] = [Self::DateSelected, Self::MonthSelected, Self::YearSelected];

    /// Stable property name, e.g. `"dateSelected"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::DateSelected => "dateSelected",
            Self::MonthSelected => "monthSelected",
            Self::YearSelected => "yearSelected",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Something the user changed, with the value before and after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CalendarEvent {
    /// `old` is the previous selection, if there was one.
    DateSelected { old: Option<NaiveDate>, new: NaiveDate },
    MonthSelected { old: Month, new: Month },
    YearSelected { old: i32, new: i32 },
}

impl CalendarEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DateSelected { .. } => EventKind::DateSelected,
            Self::MonthSelected { .. } => EventKind::MonthSelected,
            Self::YearSelected { .. } => EventKind::YearSelected,
        }
    }
}

// ----------------------------------------------------------------------------

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&CalendarEvent)>;

struct Subscription {
    id: SubscriptionId,

    /// `None` means all kinds.
    kind: Option<EventKind>,
    callback: Callback,
}

/// A list of callbacks interested in [`CalendarEvent`]s.
///
/// Callbacks are called in the order they subscribed.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl Subscribers {
    /// Call `callback` for every event of the given kind.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&CalendarEvent) + 'static,
    ) -> SubscriptionId {
        self.add(Some(kind), Box::new(callback))
    }

    /// Call `callback` for every event.
    pub fn subscribe_all(
        &mut self,
        callback: impl FnMut(&CalendarEvent) + 'static,
    ) -> SubscriptionId {
        self.add(None, Box::new(callback))
    }

    fn add(&mut self, kind: Option<EventKind>, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, callback });
        id
    }

    /// Returns `false` if there was no such subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != len_before
    }

    pub fn notify(&mut self, event: &CalendarEvent) {
        log::trace!("{}: {event:?}", event.kind());
        for subscription in &mut self.subscriptions {
            if subscription.kind.is_none_or(|kind| kind == event.kind()) {
                (subscription.callback)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn month_event() -> CalendarEvent {
        CalendarEvent::MonthSelected {
            old: Month::December,
            new: Month::January,
        }
    }

    fn year_event() -> CalendarEvent {
        CalendarEvent::YearSelected { old: 2017, new: 2018 }
    }

    #[test]
    fn filtered_by_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(EventKind::YearSelected, move |e| seen.borrow_mut().push(*e));
        }

        subscribers.notify(&month_event());
        subscribers.notify(&year_event());

        assert_eq!(*seen.borrow(), vec![year_event()]);
    }

    #[test]
    fn subscribe_all_sees_everything_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        {
            let seen = Rc::clone(&seen);
            subscribers.subscribe_all(move |e| seen.borrow_mut().push(("first", e.kind())));
        }
        {
            let seen = Rc::clone(&seen);
            subscribers.subscribe_all(move |e| seen.borrow_mut().push(("second", e.kind())));
        }

        subscribers.notify(&month_event());

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", EventKind::MonthSelected),
                ("second", EventKind::MonthSelected)
            ]
        );
    }

    #[test]
    fn unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::default();
        let id = {
            let count = Rc::clone(&count);
            subscribers.subscribe_all(move |_| *count.borrow_mut() += 1)
        };
        assert_eq!(subscribers.len(), 1);

        subscribers.notify(&year_event());
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id), "already gone");
        subscribers.notify(&year_event());

        assert_eq!(*count.borrow(), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn names() {
        assert_eq!(EventKind::DateSelected.name(), "dateSelected");
        assert_eq!(EventKind::MonthSelected.to_string(), "monthSelected");
        assert_eq!(year_event().kind().name(), "yearSelected");
    }
}
