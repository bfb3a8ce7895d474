use colored::Colorize;
use folio_lib::{NoticeLength, NoticeStyle, Notifier};

/// Prints notices to stdout. Long notices keep their line breaks, short ones are a single
/// line.
pub struct TerminalNotifier {
    style: NoticeStyle,
}

impl TerminalNotifier {
    pub fn new(style: NoticeStyle) -> Self {
        Self { style }
    }

    fn render(&self, message: &str, length: NoticeLength) -> String {
        let (headline, rest) = match length {
            NoticeLength::Short => (message.replace('\n', " "), None),
            NoticeLength::Long => match message.split_once('\n') {
                Some((headline, rest)) => (headline.to_string(), Some(rest)),
                None => (message.to_string(), None),
            },
        };

        let headline = match self.style {
            NoticeStyle::Plain => headline,
            NoticeStyle::Color => headline.bold().to_string(),
        };

        match rest {
            Some(rest) => format!("{headline}\n{rest}"),
            None => headline,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, length: NoticeLength) {
        println!("{}", self.render(message, length));
    }
}
