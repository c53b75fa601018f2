//! Static facet configuration for the catalog.
//!
//! Everything here is fixed input data for the filtering and ranking
//! services: category tabs with their backing resources, bucket boundaries
//! and option lists shown in the filter dropdowns. None of it is computed
//! from the collection at runtime.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// Upper bound of the continuous price slider, in rubles.
pub const PRICE_CEILING: f64 = 500_000.0;

/// Resource holding the combined collection across all categories.
pub const ALL_COURSES_RESOURCE: &str = "all_courses_combined.json";

/// A catalog tab. `resource` is the JSON file backing the tab; the "top"
/// pseudo-tab has no resource of its own and is derived from the combined
/// collection instead.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub resource: Option<&'static str>,
}

/// A fixed dropdown option.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A named numeric sub-range with inclusive bounds.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct Bucket {
    pub value: &'static str,
    pub label: &'static str,
    pub min: f64,
    #[serde(skip)]
    pub max: f64,
}

/// Tabs shown in the main category row.
pub const MAIN_CATEGORIES: &[Category] = &[
    Category { id: "all", label: "Все курсы", resource: Some(ALL_COURSES_RESOURCE) },
    Category { id: "top", label: "Топ курсы", resource: None },
    Category { id: "typeProgramming", label: "Программирование", resource: Some("courses_adult_programming.json") },
    Category { id: "typeDesign", label: "Дизайн", resource: Some("courses_adult_design.json") },
    Category { id: "typeMarketing", label: "Маркетинг", resource: Some("courses_adult_marketing.json") },
    Category { id: "typeManagement", label: "Бизнес и управление", resource: Some("courses_adult_management.json") },
];

/// Tabs folded under the "more" toggle.
pub const MORE_CATEGORIES: &[Category] = &[
    Category { id: "typeAnalytics", label: "Аналитика", resource: Some("courses_adult_analytics.json") },
    Category { id: "typeFinance", label: "Финансы", resource: Some("courses_adult_finance.json") },
    Category { id: "typeLanguage", label: "Иностранные языки", resource: Some("courses_adult_language.json") },
    Category { id: "typeNeuralNetworks", label: "Нейросети", resource: Some("courses_adult_neuralnetworks.json") },
    Category { id: "typeSoftSkills", label: "Саморазвитие", resource: Some("courses_adult_softskills.json") },
    Category { id: "typeCreativity", label: "Творчество", resource: Some("courses_adult_creativity.json") },
    Category { id: "typeBeauty", label: "Красота и здоровье", resource: Some("courses_adult_beauty.json") },
    Category { id: "typePsychology", label: "Психология", resource: Some("courses_adult_psychology.json") },
    Category { id: "typeSport", label: "Спорт", resource: Some("courses_adult_sport.json") },
    Category { id: "typePedagogy", label: "Педагогика", resource: Some("courses_adult_pedagogy.json") },
];

/// Options of the category (learning type) filter.
pub const CATEGORY_OPTIONS: &[FacetOption] = &[
    FacetOption { value: "typeProgramming", label: "Программирование" },
    FacetOption { value: "typeDesign", label: "Дизайн" },
    FacetOption { value: "typeMarketing", label: "Маркетинг" },
    FacetOption { value: "typeAnalytics", label: "Аналитика" },
    FacetOption { value: "typeManagement", label: "Менеджмент" },
    FacetOption { value: "typeFinance", label: "Финансы" },
    FacetOption { value: "typeLanguage", label: "Иностранные языки" },
    FacetOption { value: "typeNeuralNetworks", label: "Нейросети" },
    FacetOption { value: "typeSoftSkills", label: "Саморазвитие" },
    FacetOption { value: "typeCreativity", label: "Творчество" },
    FacetOption { value: "typeBeauty", label: "Красота и здоровье" },
    FacetOption { value: "typePsychology", label: "Психология" },
];

/// Options of the level filter.
pub const LEVEL_OPTIONS: &[FacetOption] = &[
    FacetOption { value: "beginner", label: "С нуля" },
    FacetOption { value: "intermediate", label: "С опытом" },
    FacetOption { value: "advanced", label: "Продвинутый" },
];

/// Options of the learning-goal filter.
pub const TARGET_OPTIONS: &[FacetOption] = &[
    FacetOption { value: "learnProfession", label: "Освоить профессию с нуля" },
    FacetOption { value: "developSkills", label: "Развить навыки" },
    FacetOption { value: "professionalRetraining", label: "Профессиональная переподготовка" },
    FacetOption { value: "qualification", label: "Повышение квалификации" },
    FacetOption { value: "hobby", label: "Найти хобби или узнать новое" },
];

/// Price buckets of the exclusive price filter.
pub const PRICE_BUCKETS: &[Bucket] = &[
    Bucket { value: "free", label: "Бесплатно", min: 0.0, max: 0.0 },
    Bucket { value: "10-50", label: "10 000 ₽ – 50 000 ₽", min: 10_000.0, max: 50_000.0 },
    Bucket { value: "50-100", label: "50 000 ₽ – 100 000 ₽", min: 50_000.0, max: 100_000.0 },
    Bucket { value: "100-200", label: "100 000 ₽ – 200 000 ₽", min: 100_000.0, max: 200_000.0 },
    Bucket { value: "200+", label: "от 200 000 ₽", min: 200_000.0, max: f64::INFINITY },
];

/// Duration buckets, in months.
pub const DURATION_BUCKETS: &[Bucket] = &[
    Bucket { value: "less1", label: "Меньше месяца", min: 0.0, max: 1.0 },
    Bucket { value: "1-3", label: "1 – 3 месяца", min: 1.0, max: 3.0 },
    Bucket { value: "3-6", label: "3 – 6 месяцев", min: 3.0, max: 6.0 },
    Bucket { value: "6-12", label: "6 – 12 месяцев", min: 6.0, max: 12.0 },
    Bucket { value: "12+", label: "от 12 месяцев", min: 12.0, max: f64::INFINITY },
];

/// Sort modes offered by the sort dropdown, in display order.
pub const SORT_OPTIONS: &[FacetOption] = &[
    FacetOption { value: "popular", label: "По популярности" },
    FacetOption { value: "price_asc", label: "Сначала дешевле" },
    FacetOption { value: "price_desc", label: "Сначала дороже" },
    FacetOption { value: "rating", label: "По рейтингу" },
    FacetOption { value: "duration_asc", label: "По длительности" },
];

lazy_static! {
    /// Direction tag → localized display name.
    static ref DIRECTION_LABELS: HashMap<&'static str, &'static str> = HashMap::from([
        // Программирование
        ("python", "Python"),
        ("javascript", "JavaScript"),
        ("java", "Java"),
        ("php", "PHP"),
        ("csharp", "C#"),
        ("cpp", "C++"),
        ("swift", "Swift"),
        ("kotlin", "Kotlin"),
        ("go", "Go"),
        ("ruby", "Ruby"),
        ("sql", "SQL"),
        ("frontend", "Frontend-разработка"),
        ("backend", "Backend-разработка"),
        ("fullstack", "Fullstack-разработка"),
        ("web_development", "Веб-разработка"),
        ("mobile_development", "Мобильная разработка"),
        ("game_development", "Разработка игр"),
        ("data_science", "Data Science"),
        ("machine_learning", "Машинное обучение"),
        ("devops", "DevOps"),
        ("qa", "Тестирование QA"),
        ("cybersecurity", "Кибербезопасность"),
        ("1c", "1С-программирование"),
        ("blockchain", "Блокчейн"),
        // Дизайн
        ("ux_ui", "UX/UI дизайн"),
        ("web_design", "Веб-дизайн"),
        ("graphic_design", "Графический дизайн"),
        ("motion_design", "Моушн-дизайн"),
        ("interior_design", "Дизайн интерьера"),
        ("3d_modeling", "3D-моделирование"),
        ("illustration", "Иллюстрация"),
        ("photo", "Фотография"),
        ("video", "Видеосъёмка"),
        // Маркетинг
        ("smm", "SMM"),
        ("seo", "SEO"),
        ("context_ads", "Контекстная реклама"),
        ("target_ads", "Таргетированная реклама"),
        ("email_marketing", "Email-маркетинг"),
        ("content_marketing", "Контент-маркетинг"),
        ("copywriting", "Копирайтинг"),
        ("internet_marketing", "Интернет-маркетинг"),
        ("entrepreneur_marketing", "Маркетинг для предпринимателей"),
        // Аналитика
        ("data_analyst", "Аналитик данных"),
        ("business_analyst", "Бизнес-аналитик"),
        ("product_analyst", "Продуктовый аналитик"),
        ("web_analyst", "Веб-аналитика"),
        ("financial_analyst", "Финансовый аналитик"),
        // Менеджмент
        ("project_management", "Управление проектами"),
        ("product_management", "Продуктовый менеджмент"),
        ("agile", "Agile/Scrum"),
        ("hr", "HR-менеджмент"),
        ("sales", "Продажи"),
        // Другое
        ("excel", "Excel"),
        ("powerpoint", "PowerPoint"),
        ("english", "Английский язык"),
        ("german", "Немецкий язык"),
        ("chinese", "Китайский язык"),
        ("neural_networks", "Нейросети"),
        ("chatgpt", "ChatGPT"),
        ("midjourney", "Midjourney"),
    ]);
}

/// All category tabs, main row first.
pub fn all_categories() -> impl Iterator<Item = &'static Category> {
    MAIN_CATEGORIES.iter().chain(MORE_CATEGORIES.iter())
}

/// Look up a category tab by id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    all_categories().find(|category| category.id == id)
}

/// Look up a price bucket by its option value.
pub fn price_bucket(value: &str) -> Option<&'static Bucket> {
    PRICE_BUCKETS.iter().find(|bucket| bucket.value == value)
}

/// Look up a duration bucket by its option value.
pub fn duration_bucket(value: &str) -> Option<&'static Bucket> {
    DURATION_BUCKETS.iter().find(|bucket| bucket.value == value)
}

/// Localized label for a direction tag: case-insensitive lookup first,
/// then exact-case, then the raw tag itself.
pub fn direction_label(tag: &str) -> String {
    let lowered = tag.to_lowercase();
    DIRECTION_LABELS
        .get(lowered.as_str())
        .or_else(|| DIRECTION_LABELS.get(tag))
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| tag.to_string())
}
