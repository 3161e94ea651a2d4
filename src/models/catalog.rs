//! Static option catalogs offered by the vacancy search wizard

/// A selectable option: the code sent back to the bot and the label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem {
    pub code: &'static str,
    pub label: &'static str,
}

const fn item(code: &'static str, label: &'static str) -> OptionItem {
    OptionItem { code, label }
}

pub const COUNTRIES: &[OptionItem] = &[
    item("belarus", "Беларусь"),
    item("rossiya", "Россия"),
    item("ukraina", "Украина"),
    item("udalennaya-rabota", "Удаленная работа"),
];

pub const PROFILES: &[OptionItem] = &[
    item("hr", "Hr"),
    item("marketing", "Маркетинг"),
    item("otdel-prodazh", "Отдел продаж"),
    item("razrabotka", "Разработка"),
    item("testirovanie", "Тестирование"),
    item("upravlenie-i-analitika", "Управление и аналитика"),
];

/// The empty code means "any level" and is forwarded to the directory as-is.
pub const LEVELS: &[OptionItem] = &[
    item("junior", "Junior"),
    item("middle", "Middle"),
    item("senior", "Senior"),
    item("bez-opyita", "Без опыта"),
    item("", "Неважно"),
];

/// Labels of an option set joined for inclusion in a prompt
pub fn joined_labels(items: &[OptionItem]) -> String {
    items.iter().map(|item| item.label).collect::<Vec<_>>().join(", ")
}
