pub struct GameSettings {
    pub questions_file: &'static str,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            questions_file: "questions.json",
        }
    }
}

pub struct AppConfig {
    pub game: GameSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            game: GameSettings::default(),
        }
    }
}
