use derive_more::Display;
use strum::{EnumIter, IntoStaticStr};

/// A personal profile. `name` doubles as the key it is archived under.
///
/// Every field is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display(
    "Name: {name}\nEmail: {email}\nPhone: {phone}\nAbout Me: {about_me}\nAddress: {address}\nSkills: {skills}\nWebsite: {website}"
)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub about_me: String,
    pub address: String,
    pub skills: String,
    pub website: String,
}

/// One field of a [`Profile`]. The string form is the key the field is stored under in the
/// current-form snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    AboutMe,
    Address,
    Skills,
    Website,
}

impl ProfileField {
    /// The fields that make up an archived record, in the order they are stored.
    pub const ARCHIVED: [ProfileField; 6] = [
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::AboutMe,
        ProfileField::Address,
        ProfileField::Skills,
        ProfileField::Website,
    ];

    pub fn key(self) -> &'static str {
        self.into()
    }
}

impl Profile {
    /// An otherwise empty profile with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        use ProfileField::*;

        match field {
            Name => &self.name,
            Email => &self.email,
            Phone => &self.phone,
            AboutMe => &self.about_me,
            Address => &self.address,
            Skills => &self.skills,
            Website => &self.website,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        use ProfileField::*;

        let slot = match field {
            Name => &mut self.name,
            Email => &mut self.email,
            Phone => &mut self.phone,
            AboutMe => &mut self.about_me,
            Address => &mut self.address,
            Skills => &mut self.skills,
            Website => &mut self.website,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::{Profile, ProfileField};

    #[test]
    fn test_field_keys() {
        let keys: Vec<&str> = ProfileField::iter().map(ProfileField::key).collect();

        assert_eq!(
            keys,
            vec![
                "name", "email", "phone", "aboutMe", "address", "skills", "website"
            ]
        );
    }

    #[test]
    fn test_get_set() {
        let mut profile = Profile::named("Ana");

        for field in ProfileField::ARCHIVED {
            profile.set(field, field.key().to_uppercase());
        }

        assert_eq!(profile.get(ProfileField::Name), "Ana");
        assert_eq!(profile.get(ProfileField::AboutMe), "ABOUTME");
        assert_eq!(profile.website, "WEBSITE");
    }

    #[test]
    fn test_display() {
        let profile = Profile {
            name: "Ana".into(),
            email: "a@x.com".into(),
            ..Default::default()
        };

        assert_eq!(
            profile.to_string(),
            "Name: Ana\nEmail: a@x.com\nPhone: \nAbout Me: \nAddress: \nSkills: \nWebsite: "
        );
    }
}
