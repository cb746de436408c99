//! The site's form schemas. Field names and rule values mirror what
//! the submission endpoints expect; each `validate` runs every rule
//! and returns the full report.

use crate::{report::FormReport, rules};
use serde::{Deserialize, Serialize};

///
/// ApplicationForm
///
/// Job-application submission.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub preferred_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub city: String,
    pub address: String,
    pub postcode: String,
    pub country: String,
}

impl ApplicationForm {
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();

        rules::length(&mut report, "firstName", &self.first_name, 3, 50, "First name");
        rules::letters_and_spaces(&mut report, "firstName", &self.first_name, "First name");

        rules::length(&mut report, "lastName", &self.last_name, 3, 50, "Last name");
        rules::letters_and_spaces(&mut report, "lastName", &self.last_name, "Last name");

        // preferred name is optional
        rules::max_length(
            &mut report,
            "preferredName",
            &self.preferred_name,
            50,
            "Preferred name",
        );

        rules::email(&mut report, "email", &self.email);

        rules::length(&mut report, "phone", &self.phone, 10, 15, "Phone number");
        rules::digits_with_plus(&mut report, "phone", &self.phone, "Phone number");

        rules::required(&mut report, "birthDate", &self.birth_date, "Birth date");

        rules::length(&mut report, "city", &self.city, 2, 100, "City");
        rules::length(&mut report, "address", &self.address, 5, 200, "Address");
        rules::length(&mut report, "postcode", &self.postcode, 4, 10, "Postcode");
        rules::length(&mut report, "country", &self.country, 2, 100, "Country");

        report
    }
}

///
/// SignUpForm
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignUpForm {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();

        rules::length(&mut report, "username", &self.username, 3, 20, "Username");

        rules::length(&mut report, "firstname", &self.firstname, 3, 50, "First name");
        rules::letters(&mut report, "firstname", &self.firstname, "First name");

        rules::length(&mut report, "lastname", &self.lastname, 3, 50, "Last name");
        rules::letters(&mut report, "lastname", &self.lastname, "Last name");

        rules::email(&mut report, "email", &self.email);
        rules::password(&mut report, "password", &self.password);

        if self.confirm_password != self.password {
            report.push("confirmPassword", "Passwords do not match");
        }

        report
    }
}

///
/// SignInForm
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();

        rules::email(&mut report, "email", &self.email);
        rules::password(&mut report, "password", &self.password);

        report
    }
}

///
/// ProfileForm
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProfileForm {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
}

impl ProfileForm {
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();

        rules::length(&mut report, "username", &self.username, 3, 20, "Username");

        rules::length(&mut report, "firstname", &self.firstname, 3, 50, "First name");
        rules::letters(&mut report, "firstname", &self.firstname, "First name");

        rules::length(&mut report, "lastname", &self.lastname, 3, 50, "Last name");
        rules::letters(&mut report, "lastname", &self.lastname, "Last name");

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_application() -> ApplicationForm {
        ApplicationForm {
            first_name: "Anna Lise".to_string(),
            last_name: "Berg".to_string(),
            preferred_name: String::new(),
            email: "anna@mail.com".to_string(),
            phone: "+4712345678".to_string(),
            birth_date: "1990-04-02".to_string(),
            city: "Oslo".to_string(),
            address: "Storgata 1".to_string(),
            postcode: "0155".to_string(),
            country: "Norway".to_string(),
        }
    }

    #[test]
    fn valid_application_passes() {
        assert!(valid_application().validate().is_valid());
    }

    #[test]
    fn application_collects_all_issues() {
        let form = ApplicationForm {
            first_name: "A1".to_string(),
            phone: "12ab".to_string(),
            ..valid_application()
        };
        let report = form.validate();

        // short + non-letter first name, short + non-digit phone
        assert_eq!(report.field("firstName").len(), 2);
        assert_eq!(report.field("phone").len(), 2);
        assert!(report.field("email").is_empty());
    }

    #[test]
    fn application_requires_birth_date() {
        let form = ApplicationForm {
            birth_date: String::new(),
            ..valid_application()
        };

        assert_eq!(form.validate().field("birthDate").len(), 1);
    }

    #[test]
    fn preferred_name_is_optional_but_bounded() {
        let ok = ApplicationForm {
            preferred_name: "Annie".to_string(),
            ..valid_application()
        };
        assert!(ok.validate().is_valid());

        let long = ApplicationForm {
            preferred_name: "a".repeat(51),
            ..valid_application()
        };
        assert!(!long.validate().is_valid());
    }

    #[test]
    fn sign_up_checks_password_confirmation() {
        let form = SignUpForm {
            username: "annab".to_string(),
            firstname: "Anna".to_string(),
            lastname: "Berg".to_string(),
            email: "anna@mail.com".to_string(),
            password: "Abcde1!".to_string(),
            confirm_password: "Abcde1?".to_string(),
        };
        let report = form.validate();

        assert_eq!(report.field("confirmPassword"), ["Passwords do not match"]);
    }

    #[test]
    fn sign_up_rejects_spaced_names() {
        let form = SignUpForm {
            username: "annab".to_string(),
            firstname: "Anna Lise".to_string(),
            lastname: "Berg".to_string(),
            email: "anna@mail.com".to_string(),
            password: "Abcde1!".to_string(),
            confirm_password: "Abcde1!".to_string(),
        };

        // sign-up names are letters-only, unlike the application form
        assert_eq!(form.validate().field("firstname").len(), 1);
    }

    #[test]
    fn sign_in_reports_weak_password() {
        let form = SignInForm {
            email: "anna@mail.com".to_string(),
            password: "abcdef".to_string(),
        };
        let report = form.validate();

        // no uppercase, no digit, no special
        assert_eq!(report.field("password").len(), 3);
    }

    #[test]
    fn profile_bounds_username() {
        let form = ProfileForm {
            username: "ab".to_string(),
            firstname: "Anna".to_string(),
            lastname: "Berg".to_string(),
        };

        assert!(!form.validate().is_valid());
    }
}
