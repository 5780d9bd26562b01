/// Where jokes come from and which ones we accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeApiConfig {
    pub base_url: String,
    pub category: String,
    pub blacklist_flags: Vec<String>,
    pub joke_type: String,
}

impl Default for JokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://v2.jokeapi.dev/joke/".to_string(),
            category: "Programming".to_string(),
            blacklist_flags: ["nsfw", "religious", "political", "racist", "sexist", "explicit"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            joke_type: "twopart".to_string(),
        }
    }
}

impl JokeApiConfig {
    pub fn url(&self) -> String {
        format!(
            "{}{}?blacklistFlags={}&type={}",
            self.base_url,
            self.category,
            self.blacklist_flags.join(","),
            self.joke_type
        )
    }
}

pub const APP_TITLE: &str = "DevBreak - Jokes & Quiz";
pub const WINDOW_SIZE: [f32; 2] = [720.0, 760.0];
