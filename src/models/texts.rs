//! User-facing message texts

pub const SEARCH_VACANCIES_BUTTON: &str = "Поиск вакансий";

pub const GREETING: &str = "Здравствуйте!";

pub const SUBSCRIBED: &str = "thanks for subscribing!";

pub const CHOOSE_OPTION: &str = "Выберите опцию";

pub const NO_VACANCIES: &str = "Извините, по выбранным критериям, вакансий не найдено.";

pub const DIRECTORY_UNAVAILABLE: &str =
    "Извините, сервис вакансий временно недоступен. Попробуйте позже.";

pub fn choose_country(labels: &str) -> String {
    format!(
        "Доступны вакансии в следующих странах: {}. Пожалуйста, выберите одну из них.",
        labels
    )
}

pub fn choose_profile(labels: &str) -> String {
    format!(
        "Доступны вакансии по следующим профилям: {}. Пожалуйста, выберите один из них.",
        labels
    )
}

pub fn choose_level(labels: &str) -> String {
    format!(
        "Укажите пожалуйста какой у вас опыт в этой области: {}. Пожалуйста, выберите один из них.",
        labels
    )
}
