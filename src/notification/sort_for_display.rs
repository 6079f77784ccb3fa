use std::cmp::Reverse;

use super::Notification;

/// Critical before Warning; order within each group is preserved.
pub fn sort_for_display(notifications: &mut [Notification]) {
    // sort_by_key is stable
    notifications.sort_by_key(|n| Reverse(n.alert_type));
}

pub fn sorted_for_display(mut notifications: Vec<Notification>) -> Vec<Notification> {
    sort_for_display(&mut notifications);
    notifications
}
