mod record;

pub(crate) use record::ProfileRecord;

/// Set once the first profile has been saved
pub(crate) const DATA_SAVED_KEY: &str = "dataSaved";
/// The set of every saved profile name
pub(crate) const NAME_LIST_KEY: &str = "nameList";
const NAME_DATA_PREFIX: &str = "nameData_";

/// Key of the archived record for `name`.
pub(crate) fn name_data_key(name: &str) -> String {
    format!("{NAME_DATA_PREFIX}{name}")
}

#[cfg(test)]
mod test {
    use super::name_data_key;

    #[test]
    fn test_name_data_key() {
        assert_eq!(name_data_key("Ana"), "nameData_Ana");
        assert_eq!(name_data_key(""), "nameData_");
    }
}
