//! Prompt text for a single quote request.

use quote_llm::Message;
use quote_types::EventContext;

/// Fixed system instruction sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates inspirational, motivational quotes.";

/// User prompt for one quote. Inputs are embedded verbatim.
pub fn build_prompt(event: &EventContext) -> String {
    let EventContext {
        event_name: name,
        event_description: description,
        category,
    } = event;
    format!(
        r#"The name of the event is {name}, and the event description is: {description}.

Please provide a motivational quote to encourage, motivate the user and that must be highly relevant to the {category} category.

Strict guidelines to follow:

The quote must be high quality and precise.
The quote must include the author's name. If the quote is AI-generated, then do not show that it's AI-generated or unknown.
The quote must be inspirational, and relevant to {name}, {description}, and the {category} category.

Please ensure the output follows this exact JSON format:

{{
"event_name": "{name}",
"quote": "quote"
}}
Now, provide one valid, high-quality, and inspirational quote related to the {description} and the {category} category."#
    )
}

/// System + user messages for one single-turn completion.
pub fn build_messages(event: &EventContext) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(build_prompt(event))]
}
