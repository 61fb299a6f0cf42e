use fake::Fake;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::{FirstName, LastName};
use learnhub_models::validators::{validate_category_title, validate_course_title, validate_login};
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct TeacherSeed {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fake_title(words: std::ops::Range<usize>) -> String {
    let words: Vec<String> = Words(words).fake();
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Category titles that pass the category title rules.
pub fn generate_titles(count: usize) -> Vec<String> {
    (0..count)
        .into_par_iter()
        .map(|_| fake_title(1..3))
        .filter(|title| validate_category_title(title).is_ok())
        .collect()
}

pub fn generate_course_titles(count: usize) -> Vec<String> {
    (0..count)
        .into_par_iter()
        .map(|_| fake_title(2..4))
        .filter(|title| validate_course_title(title).is_ok())
        .collect()
}

pub fn generate_teachers(count: usize) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let mut login = format!("{}{}", first_name.to_lowercase(), idx);
            if validate_login(&login).is_err() {
                login = format!("teacher{}", idx);
            }

            let email = format!(
                "{}.{}+teacher{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );

            TeacherSeed {
                login,
                email,
                first_name,
                last_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_valid() {
        for title in generate_titles(20) {
            assert!(validate_category_title(&title).is_ok(), "{}", title);
        }
        for title in generate_course_titles(20) {
            assert!(validate_course_title(&title).is_ok(), "{}", title);
        }
    }

    #[test]
    fn test_teachers_have_distinct_logins() {
        let teachers = generate_teachers(50);
        let mut logins: Vec<_> = teachers.iter().map(|t| t.login.clone()).collect();
        logins.sort();
        logins.dedup();

        assert_eq!(teachers.len(), 50);
        assert_eq!(logins.len(), 50);
        assert!(teachers.iter().all(|t| t.email.ends_with("@example.com")));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rust"), "Rust");
        assert_eq!(capitalize(""), "");
    }
}
