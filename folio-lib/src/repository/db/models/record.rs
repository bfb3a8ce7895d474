use crate::repository::entities::{Error, Profile, ProfileField, Result};

const DELIMITER: char = ',';
const FIELD_COUNT: usize = 6;

/// The archived form of a [`Profile`]: every field except the name, in a fixed order.
///
/// Stored as the fields joined by `,`. A field that itself contains a comma cannot be read
/// back; see [`ProfileRecord::collisions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfileRecord {
    email: String,
    phone: String,
    about_me: String,
    address: String,
    skills: String,
    website: String,
}

impl ProfileRecord {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            about_me: profile.about_me.clone(),
            address: profile.address.clone(),
            skills: profile.skills.clone(),
            website: profile.website.clone(),
        }
    }

    /// Parse a stored record. Anything other than exactly six fields is a data error, and
    /// nothing is recovered from it.
    pub fn parse(name: &str, data: &str) -> Result<Self> {
        let fields: Vec<&str> = data.split(DELIMITER).collect();

        let [email, phone, about_me, address, skills, website] = fields.as_slice() else {
            return Err(Error::MalformedRecord {
                name: name.to_string(),
                fields: fields.len(),
            });
        };

        Ok(Self {
            email: email.to_string(),
            phone: phone.to_string(),
            about_me: about_me.to_string(),
            address: address.to_string(),
            skills: skills.to_string(),
            website: website.to_string(),
        })
    }

    pub fn serialize(&self) -> String {
        self.fields().join(&DELIMITER.to_string())
    }

    /// The fields whose value contains the delimiter.
    pub fn collisions(&self) -> Vec<ProfileField> {
        ProfileField::ARCHIVED
            .into_iter()
            .zip(self.fields())
            .filter(|(_, value)| value.contains(DELIMITER))
            .map(|(field, _)| field)
            .collect()
    }

    pub fn into_profile(self, name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            email: self.email,
            phone: self.phone,
            about_me: self.about_me,
            address: self.address,
            skills: self.skills,
            website: self.website,
        }
    }

    fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.email.as_str(),
            self.phone.as_str(),
            self.about_me.as_str(),
            self.address.as_str(),
            self.skills.as_str(),
            self.website.as_str(),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::ProfileRecord;
    use crate::repository::entities::{Error, Profile, ProfileField};

    fn ana() -> Profile {
        Profile {
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            about_me: "dev".into(),
            address: "NYC".into(),
            skills: "go".into(),
            website: "ana.dev".into(),
        }
    }

    #[test]
    fn test_serialize_order() {
        let record = ProfileRecord::from_profile(&ana());

        assert_eq!(record.serialize(), "a@x.com,555,dev,NYC,go,ana.dev");
    }

    #[test]
    fn test_parse() {
        let record = ProfileRecord::parse("Ana", "a@x.com,555,dev,NYC,go,ana.dev").unwrap();

        assert_eq!(record.into_profile("Ana"), ana());
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        let record = ProfileRecord::parse("Bo", ",,,,,").unwrap();

        assert_eq!(record.into_profile("Bo"), Profile::named("Bo"));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert!(matches!(
            ProfileRecord::parse("Ana", "a@x.com,555"),
            Err(Error::MalformedRecord { fields: 2, .. })
        ));
        assert!(matches!(
            ProfileRecord::parse("Ana", "a,b,c,d,e,f,g"),
            Err(Error::MalformedRecord { fields: 7, .. })
        ));
    }

    #[test]
    fn test_collisions() {
        let mut profile = ana();
        profile.address = "1 Main St, NYC".into();
        profile.skills = "go, rust".into();
        let record = ProfileRecord::from_profile(&profile);

        assert_eq!(
            record.collisions(),
            vec![ProfileField::Address, ProfileField::Skills]
        );
        assert!(ProfileRecord::parse("Ana", &record.serialize()).is_err());
    }
}
