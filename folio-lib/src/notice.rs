//! Short messages shown to the user after each action.
//!
//! The store never presents anything itself. Callers turn operation outcomes into a
//! [`Notice`] and hand it to whatever [`Notifier`] they render with.

use derive_more::Display;

use crate::repository::entities::{Error, Profile};

/// How long a notice should stay visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    Short,
    Long,
}

/// Something that can briefly present a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str, length: NoticeLength);
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{message}")]
pub struct Notice {
    pub message: String,
    pub length: NoticeLength,
}

impl Notice {
    pub fn saved(profile: &Profile) -> Self {
        Self {
            message: format!("Data Saved!\n{profile}"),
            length: NoticeLength::Long,
        }
    }

    pub fn deleted() -> Self {
        Self {
            message: "Name Deleted".to_string(),
            length: NoticeLength::Short,
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            message: err.to_string(),
            length: NoticeLength::Short,
        }
    }

    pub fn show(&self, notifier: &impl Notifier) {
        notifier.notify(&self.message, self.length);
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use super::{Notice, NoticeLength, Notifier};
    use crate::repository::entities::{Error, Profile};

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, NoticeLength)>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str, length: NoticeLength) {
            self.0.borrow_mut().push((message.to_string(), length));
        }
    }

    #[test]
    fn test_saved() {
        let notice = Notice::saved(&Profile::named("Ana"));

        assert!(notice.message.starts_with("Data Saved!\nName: Ana\nEmail: "));
        assert_eq!(notice.length, NoticeLength::Long);
    }

    #[test]
    fn test_error_messages() {
        let cases = [
            (Error::Selection, "Select a name to delete"),
            (Error::EmptyQuery, "Enter a name to search"),
            (Error::NotFound("Ana".into()), "No data found for the name"),
            (
                Error::MalformedRecord {
                    name: "Ana".into(),
                    fields: 2,
                },
                "Data format is incorrect",
            ),
        ];

        for (err, message) in cases {
            assert_eq!(Notice::error(&err), Notice {
                message: message.to_string(),
                length: NoticeLength::Short,
            });
        }
    }

    #[test]
    fn test_show() {
        let recorder = Recorder::default();

        Notice::deleted().show(&recorder);

        assert_eq!(
            recorder.0.into_inner(),
            vec![("Name Deleted".to_string(), NoticeLength::Short)]
        );
    }
}
