use chrono::NaiveDate;
use tasuku_core::constants::SEARCH_DATE_FORMAT;
use tasuku_rule::rule::date::format_date;

use super::model::Task;

/// Selection applied when listing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task.
    All,
    /// Tasks scheduled on exactly this `YYYYMMDD` date.
    Date(String),
    /// Tasks whose title or comment contains the text, ignoring ASCII case.
    /// The text is stored lowercased.
    Text(String),
}

impl TaskFilter {
    /// ## Summary
    /// Interprets a search box value.
    ///
    /// An empty string lists everything and a `DD.MM.YYYY` date selects that
    /// day. Anything else is matched as text without regard to ASCII case.
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        let search = search.trim();
        if search.is_empty() {
            return Self::All;
        }

        match NaiveDate::parse_from_str(search, SEARCH_DATE_FORMAT) {
            Ok(date) => Self::Date(format_date(date)),
            Err(_err) => Self::Text(search.to_ascii_lowercase()),
        }
    }

    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Date(date) => task.date == *date,
            Self::Text(text) => {
                task.title.to_ascii_lowercase().contains(text.as_str())
                    || task.comment.to_ascii_lowercase().contains(text.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(date: &str, title: &str, comment: &str) -> Task {
        Task {
            date: date.to_string(),
            title: title.to_string(),
            comment: comment.to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn empty_search_lists_everything() {
        assert_eq!(TaskFilter::from_search(""), TaskFilter::All);
        assert_eq!(TaskFilter::from_search("   "), TaskFilter::All);
    }

    #[test]
    fn date_search_uses_storage_format() {
        assert_eq!(
            TaskFilter::from_search("08.03.2024"),
            TaskFilter::Date("20240308".to_string())
        );
    }

    #[test]
    fn non_date_search_is_text() {
        assert_eq!(
            TaskFilter::from_search("32.01.2024"),
            TaskFilter::Text("32.01.2024".to_string())
        );
        assert_eq!(
            TaskFilter::from_search("Gym"),
            TaskFilter::Text("gym".to_string())
        );
    }

    #[test]
    fn text_matches_title_or_comment() {
        let filter = TaskFilter::from_search("gym");
        assert!(filter.matches(&task("20240101", "gym day", "")));
        assert!(filter.matches(&task("20240101", "workout", "at the gym")));
        assert!(!filter.matches(&task("20240101", "workout", "")));
    }

    #[test]
    fn text_ignores_ascii_case() {
        assert!(TaskFilter::from_search("gym").matches(&task("20240101", "Gym", "")));
        assert!(TaskFilter::from_search("GYM").matches(&task("20240101", "", "leg day at the gym")));
    }

    #[test]
    fn date_matches_exact_day() {
        let filter = TaskFilter::Date("20240308".to_string());
        assert!(filter.matches(&task("20240308", "a", "")));
        assert!(!filter.matches(&task("20240309", "a", "")));
    }
}
