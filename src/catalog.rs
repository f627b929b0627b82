use serde::Serialize;

/// One trackable platform on the daily checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Platform {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

const PLATFORMS: [(&str, &str, &str); 6] = [
    ("linkedin", "LinkedIn", "https://www.linkedin.com/jobs"),
    ("internshala", "Internshala", "https://internshala.com"),
    ("unstop", "Unstop", "https://unstop.com"),
    ("indeed", "Indeed", "https://indeed.com"),
    ("naukri", "Naukri", "https://www.naukri.com"),
    ("wellfound", "Wellfound", "https://wellfound.com"),
];

/// Ordered, immutable list of platforms. Never part of the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    platforms: Vec<Platform>,
}

impl Catalog {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.platforms.iter().any(|platform| platform.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|platform| platform.id.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            PLATFORMS
                .iter()
                .map(|(id, name, url)| Platform::new(*id, *name, *url))
                .collect(),
        )
    }
}
