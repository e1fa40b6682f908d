//! Convenience wrappers over a completion model: trim and validate the
//! input, apply the matching template and token budget, delegate one call.

use tracing::error;

use crate::llm::{CompletionError, CompletionModel};
use crate::prompt;

pub struct Assistant<M> {
    model: M,
}

impl<M: CompletionModel> Assistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Business Q&A: 300-token budget.
    pub async fn answer_business_question(
        &self,
        question: &str,
    ) -> Result<String, CompletionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(CompletionError::EmptyInput);
        }
        self.send(prompt::business_question(question), prompt::QA_MAX_TOKENS)
            .await
    }

    /// Idea brainstorming: 400-token budget.
    pub async fn brainstorm_ideas(&self, topic: &str) -> Result<String, CompletionError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(CompletionError::EmptyInput);
        }
        self.send(
            prompt::brainstorm_ideas(topic),
            prompt::BRAINSTORM_MAX_TOKENS,
        )
        .await
    }

    /// Free-form chat turn: Q&A template, 200-token budget.
    pub async fn chat_reply(&self, message: &str) -> Result<String, CompletionError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(CompletionError::EmptyInput);
        }
        self.send(prompt::business_question(message), prompt::CHAT_MAX_TOKENS)
            .await
    }

    async fn send(&self, prompt: String, max_tokens: u32) -> Result<String, CompletionError> {
        match self.model.complete(&prompt, max_tokens).await {
            Ok(text) => Ok(text),
            Err(e) => {
                // Operator log gets the detail; the user only ever sees
                // `CompletionError::user_message()`.
                error!(target:"core::assistant","completion request failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::FALLBACK_REPLY;

    struct FakeModel {
        reply: Option<String>,
        seen: Mutex<Vec<(String, u32)>>,
    }

    impl FakeModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }
        fn failing() -> Self {
            Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            }
        }
        fn calls(&self) -> Vec<(String, u32)> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl CompletionModel for FakeModel {
        async fn complete(
            &self,
            prompt: &str,
            max_tokens: u32,
        ) -> Result<String, CompletionError> {
            self.seen
                .lock()
                .unwrap()
                .push((prompt.to_string(), max_tokens));
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(CompletionError::Network("connection refused".into())),
            }
        }
    }

    #[tokio::test]
    async fn question_wrapper_uses_qa_template_and_budget() {
        let assistant = Assistant::new(FakeModel::replying("ROI is return on investment."));
        let out = assistant
            .answer_business_question("What is ROI?")
            .await
            .unwrap();
        assert_eq!(out, "ROI is return on investment.");

        let calls = assistant.model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("Question: What is ROI?"));
        assert_eq!(calls[0].1, 300);
    }

    #[tokio::test]
    async fn brainstorm_wrapper_uses_topic_template_and_budget() {
        let assistant = Assistant::new(FakeModel::replying("1. latte subscriptions"));
        assistant.brainstorm_ideas("coffee shop").await.unwrap();

        let calls = assistant.model.calls();
        assert!(calls[0].0.contains("Topic: coffee shop"));
        assert_eq!(calls[0].1, 400);
    }

    #[tokio::test]
    async fn chat_reply_reuses_question_template_with_default_budget() {
        let assistant = Assistant::new(FakeModel::replying("hello"));
        assistant.chat_reply("hi there").await.unwrap();

        let calls = assistant.model.calls();
        assert!(calls[0].0.contains("Question: hi there"));
        assert_eq!(calls[0].1, 200);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_before_any_request() {
        let assistant = Assistant::new(FakeModel::replying("unused"));
        for input in ["", "   ", "\n\t"] {
            let err = assistant.answer_business_question(input).await.unwrap_err();
            assert!(matches!(err, CompletionError::EmptyInput));
            let err = assistant.brainstorm_ideas(input).await.unwrap_err();
            assert!(matches!(err, CompletionError::EmptyInput));
        }
        assert!(assistant.model.calls().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_propagates_with_fallback_message() {
        let assistant = Assistant::new(FakeModel::failing());
        let err = assistant
            .answer_business_question("What is ROI?")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn input_is_trimmed_before_templating() {
        let assistant = Assistant::new(FakeModel::replying("ok"));
        assistant
            .answer_business_question("  What is ROI?  ")
            .await
            .unwrap();
        let calls = assistant.model.calls();
        assert!(calls[0].0.contains("Question: What is ROI?\n"));
        assert!(!calls[0].0.contains("Question:  "));
    }
}
