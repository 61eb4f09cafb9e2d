use std::rc::Rc;

use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::gemini::GeminiClient;
use crate::storage;
use crate::types::Message;
use crate::utils::now_millis;

pub const GREETING: &str = "Hello! I'm your AI study assistant powered by Google Gemini. I can help you understand concepts, solve problems, and organize your learning. What would you like to work on today?";

/// In-memory chat history for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub messages: Vec<Message>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptAction {
    /// A user turn was sent; a reply is now pending.
    Submit(Message),
    /// The pending request produced a reply.
    Reply(Message),
    /// The pending request failed.
    Fail,
}

impl Transcript {
    pub fn with_greeting(timestamp: f64) -> Self {
        Self {
            messages: vec![Message::assistant(GREETING.to_string(), timestamp)],
            is_loading: false,
        }
    }

    pub fn apply(&mut self, action: TranscriptAction) {
        match action {
            TranscriptAction::Submit(message) => {
                // one request in flight at a time
                if self.is_loading {
                    return;
                }
                self.messages.push(message);
                self.is_loading = true;
            }
            // replies only land on a pending request
            TranscriptAction::Reply(message) => {
                if self.is_loading {
                    self.messages.push(message);
                    self.is_loading = false;
                }
            }
            TranscriptAction::Fail => {
                self.is_loading = false;
            }
        }
    }
}

impl Reducible for Transcript {
    type Action = TranscriptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Outcome of a send attempt, decided before anything is dispatched.
#[derive(Debug, PartialEq)]
pub enum SendPlan {
    /// Blank text, or a request is already in flight.
    Ignore,
    NeedKey,
    Send(GeminiClient),
}

pub fn plan_send(text: &str, is_loading: bool, api_key: Option<&str>) -> SendPlan {
    if text.trim().is_empty() || is_loading {
        return SendPlan::Ignore;
    }
    match api_key.map(GeminiClient::new) {
        Some(Ok(client)) => SendPlan::Send(client),
        _ => SendPlan::NeedKey,
    }
}

/// Everything the study chat view needs.
#[derive(Clone, PartialEq)]
pub struct StudyChat {
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub api_key: Option<String>,
    pub send_message: Callback<String>,
    pub save_api_key: Callback<String>,
}

#[hook]
pub fn use_study_chat() -> StudyChat {
    let transcript = use_reducer(|| Transcript::with_greeting(now_millis()));
    let api_key = use_state(storage::load_api_key);
    let toast = use_toast();

    let save_api_key = {
        let api_key = api_key.clone();
        let toast = toast.clone();
        Callback::from(move |key: String| match storage::save_api_key(&key) {
            Ok(key) => {
                api_key.set(Some(key));
                toast.notify("API Key Saved", "Your Gemini API key has been saved locally.");
            }
            Err(err) => {
                log::error!("Could not save API key: {}", err);
                toast.error("Error", "Your API key could not be saved.");
            }
        })
    };

    let send_message = {
        let dispatcher = transcript.dispatcher();
        let is_loading = transcript.is_loading;
        let api_key = (*api_key).clone();
        Callback::from(move |text: String| {
            let client = match plan_send(&text, is_loading, api_key.as_deref()) {
                SendPlan::Send(client) => client,
                SendPlan::NeedKey => {
                    toast.error("API Key Required", "Please enter your Google Gemini API key first.");
                    return;
                }
                SendPlan::Ignore => return,
            };

            dispatcher.dispatch(TranscriptAction::Submit(Message::user(text.clone(), now_millis())));

            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.generate(&text).await {
                    Ok(reply) => {
                        dispatcher.dispatch(TranscriptAction::Reply(Message::assistant(reply, now_millis())));
                    }
                    Err(err) => {
                        log::error!("Gemini AI error: {}", err);
                        dispatcher.dispatch(TranscriptAction::Fail);
                        toast.error(
                            "Error",
                            "Failed to get AI response. Please check your API key and try again.",
                        );
                    }
                }
            });
        })
    };

    StudyChat {
        messages: transcript.messages.clone(),
        is_loading: transcript.is_loading,
        api_key: (*api_key).clone(),
        send_message,
        save_api_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let transcript = Transcript::with_greeting(1000.0);
        assert_eq!(transcript.messages.len(), 1);
        assert!(transcript.messages[0].is_assistant());
        assert!(!transcript.is_loading);
    }

    #[test]
    fn test_submit_then_reply() {
        let mut transcript = Transcript::with_greeting(0.0);
        transcript.apply(TranscriptAction::Submit(Message::user("What is a prime?".to_string(), 1.0)));
        assert!(transcript.is_loading);
        assert_eq!(transcript.messages.len(), 2);

        transcript.apply(TranscriptAction::Reply(Message::assistant("A number...".to_string(), 2.0)));
        assert!(!transcript.is_loading);
        assert_eq!(transcript.messages.len(), 3);
        assert_eq!(transcript.messages[2].content, "A number...");
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut transcript = Transcript::with_greeting(0.0);
        transcript.apply(TranscriptAction::Submit(Message::user("first".to_string(), 1.0)));
        let before = transcript.clone();

        transcript.apply(TranscriptAction::Submit(Message::user("second".to_string(), 2.0)));
        assert_eq!(transcript, before);
    }

    #[test]
    fn test_reply_without_pending_request_is_dropped() {
        let mut transcript = Transcript::with_greeting(0.0);
        transcript.apply(TranscriptAction::Reply(Message::assistant("stray".to_string(), 1.0)));
        assert_eq!(transcript.messages.len(), 1);
        assert!(!transcript.is_loading);
    }

    #[test]
    fn test_plan_ignores_blank_text() {
        assert_eq!(plan_send("", false, Some("key")), SendPlan::Ignore);
        assert_eq!(plan_send("  \n\t ", false, Some("key")), SendPlan::Ignore);
    }

    #[test]
    fn test_plan_ignores_while_loading() {
        assert_eq!(plan_send("What is osmosis?", true, Some("key")), SendPlan::Ignore);
        assert_eq!(plan_send("What is osmosis?", true, None), SendPlan::Ignore);
    }

    #[test]
    fn test_plan_needs_key() {
        assert_eq!(plan_send("What is osmosis?", false, None), SendPlan::NeedKey);
        assert_eq!(plan_send("What is osmosis?", false, Some("   ")), SendPlan::NeedKey);
    }

    #[test]
    fn test_plan_sends_with_key() {
        let expected = GeminiClient::new("key").unwrap();
        assert_eq!(plan_send("What is osmosis?", false, Some(" key ")), SendPlan::Send(expected));
    }

    #[test]
    fn test_failure_keeps_user_turn() {
        let mut transcript = Transcript::with_greeting(0.0);
        transcript.apply(TranscriptAction::Submit(Message::user("hello".to_string(), 1.0)));
        transcript.apply(TranscriptAction::Fail);
        assert!(!transcript.is_loading);
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[1].content, "hello");
    }
}
