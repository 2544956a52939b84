//! Property-based tests for to-do field validation
//!
//! Uses proptest to check the field constraints over generated inputs.

use proptest::prelude::*;
use todoapp::shared::todo::{MAX_DESCRIPTION_LEN, PRIORITY_RANGE};
use todoapp::shared::TodoRequest;

fn request(title: String, description: Option<String>, priority: i32) -> TodoRequest {
    TodoRequest {
        title,
        description,
        priority,
        complete: None,
    }
}

proptest! {
    #[test]
    fn test_priority_in_range_is_accepted(priority in 1i32..=5) {
        prop_assert!(request("task".to_string(), None, priority).validate().is_ok());
    }

    #[test]
    fn test_priority_out_of_range_is_rejected(priority in any::<i32>().prop_filter("outside 1..=5", |p| !PRIORITY_RANGE.contains(p))) {
        let err = request("task".to_string(), None, priority).validate().unwrap_err();
        prop_assert_eq!(err.field(), Some("priority"));
    }

    #[test]
    fn test_description_length_limit(len in 0usize..=600) {
        let description = "é".repeat(len);
        let result = request("task".to_string(), Some(description), 3).validate();
        prop_assert_eq!(result.is_ok(), len <= MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn test_blank_titles_are_rejected(spaces in " {0,10}") {
        let err = request(spaces, None, 3).validate().unwrap_err();
        prop_assert_eq!(err.field(), Some("title"));
    }
}
