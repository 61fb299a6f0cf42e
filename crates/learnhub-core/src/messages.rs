//! Client-facing messages.
//!
//! Every error and success string the API returns lives here so handlers,
//! validators and tests agree on the exact wording.

pub mod common {
    pub const UNEXPECTED_ERROR: &str = "Unexpected error";
    pub const UNEXPECTED_ERROR_PREFIX: &str = "Unexpected error: ";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const NO_SUCH_ROLE: &str = "No such role in the database";
    pub const UNABLE_TO_PARSE_ID: &str = "Unable to parse id, please add id parameter";
    pub const NUMERIC_PARAMETER: &str = "Parameter should be numeric";
    pub const STRING_PARAMETER: &str = "Parameter should be a string";
    pub const ONLY_ALPHABET_ALLOWED: &str =
        "Only RU/EN alphabet symbols allowed, please change your request";
    pub const REMOVE_SUCCESS: &str = "Success: record was removed.";
    pub const INVALID_BODY: &str = "Unable to parse request body, please send valid JSON";

    pub fn required_fields(fields: &[&str]) -> String {
        format!("Please send required fields: {}", fields.join(","))
    }
}

pub mod auth {
    pub const AUTH_PASSED: &str = "Authentication passed!";
    pub const EXPIRED_TOKEN: &str = "Token is expired";
    pub const ACCESS_DENIED: &str = "Access denied: insufficient role";
}

pub mod login {
    pub const USER_EXIST: &str = "User with such credentials already exist";
    pub const UNABLE_TO_CREATE_USER: &str = "Unable to create user: ";
    pub const WRONG_CREDENTIALS: &str = "Unable to authenticate user, wrong credentials";
    pub const INVALID_EMAIL: &str = "Please send a valid email";
    pub const LOGIN_LENGTH: &str = "Login length should be from 3 to 30 symbols";
    pub const PASSWORD_LENGTH: &str = "Minimum password length is: 6";

    pub fn wrong_role(roles: &[&str]) -> String {
        format!("Wrong role, please send the right role: {}", roles.join(","))
    }
}

pub mod user {
    pub const NO_USER: &str = "Unable to find user record";
    pub const NO_TEACHER: &str = "Unable to find teacher record";
    pub const NO_TEACHER_ROLE: &str = "Unable to find teacher role";
    pub const UNABLE_TO_UPDATE: &str = "Unable to update user: ";
    pub const UNIQUE_FIELDS: &str = "login and email fields should be unique";
    pub const UNABLE_TO_REMOVE: &str = "Unable to remove teacher record: ";
    pub const NAME_LENGTH: &str = "Maximum name length is: 50";
}

pub mod role {
    pub const UNABLE_TO_LIST: &str = "Unable to find role record(s): ";
}

pub mod category {
    pub const NO_CATEGORY: &str = "Unable to find category record(s)";
    pub const UNABLE_CREATE_CATEGORY: &str = "Unable to create category: ";
    pub const UNABLE_CHANGE_CATEGORY: &str = "Unable to change category: ";
    pub const UNABLE_REMOVE_CATEGORY: &str = "Unable to remove category: ";
    pub const UNIQUE_FIELDS: &str = "title should be unique";

    pub fn wrong_min_length(min: usize) -> String {
        format!("Minimum category length is: {}", min)
    }

    pub fn wrong_max_length(max: usize) -> String {
        format!("Maximum category length is: {}", max)
    }
}

pub mod course {
    pub const NO_COURSE: &str = "Unable to find course record(s)";
    pub const UNABLE_CREATE_COURSE: &str = "Unable to create course: ";
    pub const UNABLE_CHANGE_COURSE: &str = "Unable to change course: ";
    pub const UNABLE_REMOVE_COURSE: &str = "Unable to remove course: ";
    pub const UNABLE_ENROLL: &str = "Unable to enroll to the course: ";
    pub const UNABLE_LEAVE: &str = "Unable to leave the course: ";
    pub const UNIQUE_FIELDS: &str = "title should be unique";
    pub const ALREADY_ENROLLED: &str = "Student is already enrolled to the course";
    pub const NOT_ENROLLED: &str = "Student is not enrolled to the course";
    pub const ENROLL_SUCCESS: &str = "Success: student was enrolled to the course.";
    pub const LEAVE_SUCCESS: &str = "Success: student left the course.";
    pub const NO_ACCESS: &str = "Access denied: you have no access to this course";
    pub const DESCRIPTION_LENGTH: &str = "Maximum description length is: 1000";

    pub fn wrong_min_length(min: usize) -> String {
        format!("Minimum course length is: {}", min)
    }

    pub fn wrong_max_length(max: usize) -> String {
        format!("Maximum course length is: {}", max)
    }
}

pub mod material {
    pub const NO_MATERIAL: &str = "Unable to find material record(s)";
    pub const UNABLE_CREATE_MATERIAL: &str = "Unable to create material: ";
    pub const UNABLE_CHANGE_MATERIAL: &str = "Unable to change material: ";
    pub const UNABLE_REMOVE_MATERIAL: &str = "Unable to remove material: ";
    pub const NOT_COURSE_TEACHER: &str = "Only the course teacher can manage its materials";
    pub const TITLE_LENGTH: &str = "Material title length should be from 1 to 100 symbols";
    pub const CONTENT_LENGTH: &str = "Material content length should be from 1 to 10000 symbols";
}
