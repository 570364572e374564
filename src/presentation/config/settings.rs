/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub detectors: DetectorSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DetectorSettings {
    pub gemini: GeminiSettings,
    pub sarvam: SarvamSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SarvamSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(3000),
            },
            detectors: DetectorSettings {
                gemini: GeminiSettings {
                    api_key: non_empty_var("GOOGLE_API_KEY"),
                    base_url: non_empty_var("GEMINI_BASE_URL"),
                    model: non_empty_var("GEMINI_MODEL"),
                },
                sarvam: SarvamSettings {
                    api_key: non_empty_var("SARVAM_API_KEY"),
                    base_url: non_empty_var("SARVAM_BASE_URL"),
                },
            },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
