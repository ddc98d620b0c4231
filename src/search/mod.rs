use crate::storage::LocalCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    Baidu,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 3] = [Self::Google, Self::Bing, Self::Baidu];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::Baidu => "baidu",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.id().eq_ignore_ascii_case(id.trim()))
    }

    const fn query_prefix(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/search?q=",
            Self::Bing => "https://www.bing.com/search?q=",
            Self::Baidu => "https://www.baidu.com/s?wd=",
        }
    }
}

/// Navigation target for `query`, or `None` when the query is blank.
pub fn search_url(engine: SearchEngine, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}",
        engine.query_prefix(),
        urlencoding::encode(query)
    ))
}

/// Engine preference persisted as soon as it changes.
pub struct SearchPreference {
    engine: SearchEngine,
}

impl SearchPreference {
    pub fn load(cache: &LocalCache) -> Self {
        let engine = cache
            .default_engine()
            .and_then(|id| {
                let engine = SearchEngine::from_id(&id);
                if engine.is_none() {
                    tracing::debug!(id = %id, "unknown search engine id; using default");
                }
                engine
            })
            .unwrap_or_default();
        Self { engine }
    }

    pub fn engine(&self) -> SearchEngine {
        self.engine
    }

    pub fn set(&mut self, engine: SearchEngine, cache: &LocalCache) {
        self.engine = engine;
        cache.set_default_engine(engine.id());
    }
}
