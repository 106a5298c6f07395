//! Diagnostic message formatting.
//!
//! This module builds the human-readable descriptions attached to service
//! faults. Every function is pure and total: any input, including empty
//! strings and negative identifiers, produces a string without failing.
//!
//! The not-found formatters interpolate the identity they are given. Earlier
//! revisions of the message catalog accepted the identity but left it out of
//! the rendered text; that defect is fixed here.

/// Formats the message for a field that failed validation.
///
/// # Examples
///
/// ```
/// use reserv::messages::invalid_field_message;
///
/// assert_eq!(invalid_field_message("location"), "location field is invalid!");
/// ```
#[must_use]
pub fn invalid_field_message(field: &str) -> String {
    format!("{field} field is invalid!")
}

/// Formats the message for a reservation type id that does not exist.
///
/// # Examples
///
/// ```
/// use reserv::messages::invalid_reservation_type_message;
///
/// assert_eq!(
///     invalid_reservation_type_message(7),
///     "Reservation type with id 7 does not exist!"
/// );
/// ```
#[must_use]
pub fn invalid_reservation_type_message(id: i64) -> String {
    format!("Reservation type with id {id} does not exist!")
}

/// Formats the message for an invalid reservation time range, naming the
/// offending field.
#[must_use]
pub fn invalid_time_range_message(field: &str) -> String {
    format!("Reservation time range is invalid, check field {field}!")
}

/// Formats the message for a user id that was not found.
#[must_use]
pub fn nonexistent_user_id_message(user_id: i64) -> String {
    format!("User with id '{user_id}' has not been found!")
}

/// Formats the message for a username that was not found.
#[must_use]
pub fn nonexistent_username_message(username: &str) -> String {
    format!("User with username '{username}' has not been found!")
}

/// Formats the message for a resource id that was not found.
#[must_use]
pub fn nonexistent_resource_id_message(resource_id: i64) -> String {
    format!("Resource with id '{resource_id}' has not been found!")
}


#[cfg(all(test, feature = "property-tests"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn invalid_field_message_total_and_deterministic(field in ".*") {
            let first = invalid_field_message(&field);
            let second = invalid_field_message(&field);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.ends_with(" field is invalid!"));
        }

        #[test]
        fn nonexistent_messages_echo_identity(id in any::<i64>()) {
            let user = nonexistent_user_id_message(id);
            let resource = nonexistent_resource_id_message(id);
            prop_assert!(user.contains(&id.to_string()));
            prop_assert!(resource.contains(&id.to_string()));
        }

        #[test]
        fn username_message_echoes_name(name in ".*") {
            prop_assert!(nonexistent_username_message(&name).contains(&name));
        }
    }
}
