//! Ordered keyword taxonomies used for style and industry classification.
//!
//! Tables are ordered lists rather than maps: declaration order is the
//! tie-break order when two categories score the same.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Sentinel category returned when nothing in a table matches.
pub const OTHER_CATEGORY: &str = "other";

const STYLE_TABLE: &[(&str, &[&str])] = &[
    ("humor", &["ㅋ", "ㅎ", "웃", "재미", "유머", "우습", "깔깔", "하하"]),
    (
        "emotional",
        &[
            "마음", "사랑", "행복", "따뜻", "소중", "감동", "추억", "함께", "가족", "일상", "순간",
        ],
    ),
    (
        "informative",
        &["새로운", "최초", "기술", "혁신", "특허", "개발", "성분", "효과", "과학"],
    ),
    (
        "urgent",
        &["지금", "오늘", "한정", "마지막", "서둘", "빨리", "곧", "즉시", "바로"],
    ),
    (
        "premium",
        &["프리미엄", "럭셔리", "고급", "명품", "최고급", "특별", "한정판", "격"],
    ),
    (
        "practical",
        &["편리", "간편", "실용", "유용", "효율", "절약", "알뜰", "가성비", "쉽", "빠른"],
    ),
    (
        "challenge",
        &["도전", "극복", "성취", "꿈", "목표", "열정", "성공", "이루", "시작", "변화"],
    ),
    ("wordplay", &["친구", "팀", "국룰", "케미", "통역"]),
    ("wellness", &["건강", "피로", "상처", "통증", "영양", "케어"]),
    ("lifestyle", &["스타일", "삶", "생활", "디자인", "취향", "나답", "매일"]),
    ("tech_innovation", &["AI", "혁신", "미래", "성장", "발전", "진화", "스마트"]),
];

const INDUSTRY_TABLE: &[(&str, &[&str])] = &[
    (
        "tech_it",
        &["AI", "기술", "혁신", "앱", "데이터", "전자", "스마트", "디지털"],
    ),
    ("fashion_beauty", &["스타일", "패션", "옷", "뷰티", "화장", "피부"]),
    ("food_beverage", &["맛", "먹", "음식", "커피", "술", "음료", "식품"]),
    (
        "health_medical",
        &["건강", "의료", "치료", "약", "병원", "운동", "다이어트"],
    ),
    ("finance", &["은행", "카드", "보험", "금융", "투자", "적립"]),
    ("travel_leisure", &["여행", "휴가", "레저", "관광", "호텔", "항공"]),
    ("automotive", &["차", "자동차", "운전", "엔진", "주행"]),
    ("home_appliance", &["가전", "집", "홈", "가구", "생활", "청소"]),
];

/// Korean category names written by older history files, keyed to the built-in names.
const LEGACY_CATEGORY_NAMES: &[(&str, &str)] = &[
    ("유머형", "humor"),
    ("감성형", "emotional"),
    ("정보형", "informative"),
    ("긴급형", "urgent"),
    ("프리미엄형", "premium"),
    ("실용형", "practical"),
    ("도전형", "challenge"),
    ("언어유희형", "wordplay"),
    ("건강웰빙형", "wellness"),
    ("라이프형", "lifestyle"),
    ("혁신기술형", "tech_innovation"),
    ("기술IT", "tech_it"),
    ("패션뷰티", "fashion_beauty"),
    ("식품음료", "food_beverage"),
    ("건강의료", "health_medical"),
    ("금융서비스", "finance"),
    ("여행레저", "travel_leisure"),
    ("자동차", "automotive"),
    ("가전홈", "home_appliance"),
    ("기타", OTHER_CATEGORY),
];

/// Map a legacy Korean category name to its built-in name. Other names pass through.
#[must_use]
pub fn canonical_category_name(name: String) -> String {
    LEGACY_CATEGORY_NAMES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map_or(name, |(_, canonical)| (*canonical).to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    /// Build a category, dropping repeated keywords while keeping first-seen order.
    #[must_use]
    pub fn new<N, I, K>(name: N, keywords: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut seen = HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| seen.insert(k.clone()))
            .collect();
        Self {
            name: name.into(),
            keywords,
        }
    }
}

/// An ordered `(category name, keyword set)` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|c| Category::new(c.name, c.keywords))
            .collect();
        Self { categories }
    }

    fn from_static(table: &[(&str, &[&str])]) -> Self {
        Self {
            categories: table
                .iter()
                .map(|(name, keywords)| Category::new(*name, keywords.iter().copied()))
                .collect(),
        }
    }

    /// Built-in ad style table.
    #[must_use]
    pub fn default_styles() -> Self {
        Self::from_static(STYLE_TABLE)
    }

    /// Built-in industry table.
    #[must_use]
    pub fn default_industries() -> Self {
        Self::from_static(INDUSTRY_TABLE)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// The pair of tables the scorer classifies against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub styles: CategoryTable,
    pub industries: CategoryTable,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            styles: CategoryTable::default_styles(),
            industries: CategoryTable::default_industries(),
        }
    }
}

/// Load and validate a taxonomy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TaxonomyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_taxonomy(&content)
}

fn parse_taxonomy(content: &str) -> Result<Taxonomy, ConfigError> {
    let raw: Taxonomy = serde_yaml::from_str(content)?;
    let taxonomy = Taxonomy {
        styles: CategoryTable::new(raw.styles.categories),
        industries: CategoryTable::new(raw.industries.categories),
    };

    validate_table("styles", &taxonomy.styles)?;
    validate_table("industries", &taxonomy.industries)?;

    Ok(taxonomy)
}

fn validate_table(table_name: &str, table: &CategoryTable) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for category in table.iter() {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{table_name}: category name must be non-empty"
            )));
        }

        if category.name == OTHER_CATEGORY {
            return Err(ConfigError::Validation(format!(
                "{table_name}: '{OTHER_CATEGORY}' is reserved for unmatched text"
            )));
        }

        if !seen_names.insert(category.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "{table_name}: duplicate category '{}'",
                category.name
            )));
        }

        if category.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{table_name}: category '{}' has no keywords",
                category.name
            )));
        }

        if category.keywords.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{table_name}: category '{}' has an empty keyword",
                category.name
            )));
        }
    }

    Ok(())
}
