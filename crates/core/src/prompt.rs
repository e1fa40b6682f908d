//! Fixed instructional templates and per-operation token budgets.

pub const QA_MAX_TOKENS: u32 = 300;
pub const BRAINSTORM_MAX_TOKENS: u32 = 400;
/// Generic chat turns reuse the Q&A template with a smaller budget.
pub const CHAT_MAX_TOKENS: u32 = 200;

pub fn business_question(question: &str) -> String {
    format!(
        "You are a professional business assistant. Please provide a helpful and insightful answer to the following business-related question:\n\nQuestion: {question}\n\nAnswer:"
    )
}

pub fn brainstorm_ideas(topic: &str) -> String {
    format!(
        "You are a creative business strategist. Please brainstorm innovative ideas related to the following business topic:\n\nTopic: {topic}\n\nIdeas:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_template_embeds_the_question() {
        let p = business_question("What is ROI?");
        assert!(p.contains("Question: What is ROI?"));
        assert!(p.starts_with("You are a professional business assistant."));
        assert!(p.ends_with("Answer:"));
    }

    #[test]
    fn brainstorm_template_embeds_the_topic() {
        let p = brainstorm_ideas("coffee shop");
        assert!(p.contains("Topic: coffee shop"));
        assert!(p.starts_with("You are a creative business strategist."));
        assert!(p.ends_with("Ideas:"));
    }
}
