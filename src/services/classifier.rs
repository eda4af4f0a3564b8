// src/services/classifier.rs
use chrono::Local;

/// Ordered trigger-substring → canned-reply table. Matching is first-defined-
/// wins, so the insertion order below is load-bearing: a prompt containing
/// several triggers resolves to the earliest entry.
#[derive(Debug, Clone)]
pub struct ReplyTable {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl ReplyTable {
    pub fn builtin() -> Self {
        let entries = [
            (
                "hello",
                "Hello! 👋 I'm an AI assistant. How can I help you today?",
            ),
            ("hi", "Hi there! 👋 Welcome! What would you like to know?"),
            (
                "python",
                "Python 🐍 is a versatile programming language known for its simplicity and readability. It's widely used in web development, data science, AI, and automation.",
            ),
            (
                "javascript",
                "JavaScript 🚀 is the primary programming language for web browsers. It enables interactive web pages and is an essential part of web applications.",
            ),
            (
                "stream",
                "Streaming 📡 is a technique where data is transmitted in chunks rather than all at once. This provides better user experience with progressive loading.",
            ),
            (
                "ai",
                "Artificial Intelligence 🤖 refers to the simulation of human intelligence in machines.",
            ),
            (
                "render",
                "Render is a cloud platform for deploying web services. 🚀",
            ),
            (
                "vercel",
                "Vercel is amazing for deploying web apps with full streaming support! ⚡",
            ),
        ];

        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fallback: "This is a simulated AI response, streamed to you one character at a time!"
                .to_string(),
        }
    }

    /// First entry whose trigger is a substring of the lower-cased prompt
    /// wins; the fallback covers everything else.
    pub fn classify(&self, prompt: &str) -> &str {
        let lower = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| lower.contains(key.as_str()))
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for ReplyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Full response text: echo of the prompt, the matched reply, and a local
/// time-of-day trailer. The clock reading makes this non-deterministic.
pub fn compose_response(prompt: &str, reply: &str) -> String {
    let clock = Local::now().format("%-I:%M:%S %p");
    format!("📝 You asked: \"{prompt}\"\n\n{reply}\n\n⏰ {clock}")
}
