mod contact;
mod form;

pub use contact::{ContactField, ContactForm};
pub use form::{AppointmentForm, FormError, FormField};

pub const TIME_SLOTS: [&str; 14] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "01:00 PM",
    "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
}

pub fn time_slot_index(slot: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|s| *s == slot)
}

pub(crate) fn cycle(current: Option<usize>, len: usize, delta: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let next = match current {
        Some(i) => (i as i64 + i64::from(delta)).rem_euclid(len as i64) as usize,
        None if delta < 0 => len - 1,
        None => 0,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_span_two_shifts() {
        assert_eq!(TIME_SLOTS.first(), Some(&"09:00 AM"));
        assert_eq!(TIME_SLOTS.last(), Some(&"04:30 PM"));
        assert_eq!(time_slot_index("10:00 AM"), Some(2));
        assert_eq!(time_slot_index("12:00 PM"), None);
    }

    #[test]
    fn cycle_wraps_both_directions() {
        assert_eq!(cycle(None, 3, 1), Some(0));
        assert_eq!(cycle(None, 3, -1), Some(2));
        assert_eq!(cycle(Some(2), 3, 1), Some(0));
        assert_eq!(cycle(Some(0), 3, -1), Some(2));
        assert_eq!(cycle(Some(1), 0, 1), None);
    }
}
