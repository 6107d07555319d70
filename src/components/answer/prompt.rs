/// Instructions wrapped around the gathered context and the user's question
const PROMPT_TEMPLATE: &str = "You are a helpful assistant for {group} events.
Use ONLY the information provided below to answer the question.

Information from the Meetup events page:
{context}

Question: {question}

Instructions:
- Carefully analyze the provided content for any event information
- Look for dates, times, locations, and event descriptions
- If you find event details, present them clearly and completely
- If the content seems incomplete or doesn't contain current events,
  explain what you found and suggest checking the official Meetup page
- Be specific about what information is available vs. what's missing
- If you see navigation elements or page structure instead of events,
  acknowledge this and provide helpful guidance
- Always be helpful and informative, even if the content is limited

Answer:";

/// Fill the prompt template
///
/// The context is substituted last so placeholder-like text inside scraped pages is left
/// untouched.
pub fn build_prompt(group_name: &str, question: &str, context: &str) -> String {
    let (head, tail) = PROMPT_TEMPLATE
        .split_once("{context}")
        .unwrap_or((PROMPT_TEMPLATE, ""));

    let head = head.replace("{group}", group_name);
    let tail = tail.replace("{question}", question);

    format!("{}{}{}", head, context, tail)
}
