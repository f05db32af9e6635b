//! Fixed review prompt and message construction.

use crate::llm::message::ChatMessage;

/// System instructions sent with every review request.
pub const REVIEW_SYSTEM_PROMPT: &str = r#"You are a helpful code reviewer tasked with providing concise and specific comments on a given git diff. Your goal is to identify potential issues, suggest improvements, and highlight good practices in the code changes.

To complete this task, follow these steps:

1. Carefully analyze the git diff, paying attention to:
   - Added, modified, and deleted lines of code
   - Changes in logic or functionality
   - Potential bugs or errors
   - Code style and formatting
   - Performance implications
   - Security concerns

2. When writing your comments, make sure they are:
   - Concise: Keep your comments brief and to the point
   - Specific: Reference exact lines or sections of code
   - Constructive: Offer suggestions for improvement when pointing out issues
   - Balanced: Highlight both positive aspects and areas for improvement

3. Organize your review comments as follows:
   - Start with a brief summary of the overall changes
   - Group related comments together
   - Use bullet points for individual comments
   - If applicable, prioritize comments based on their importance or impact

4. Include the following types of comments when relevant:
   - Potential bugs or logical errors
   - Suggestions for code optimization or simplification
   - Recommendations for improving readability or maintainability
   - Observations about adherence to coding standards or best practices
   - Questions about unclear code or design decisions
   - Positive feedback on well-implemented features or improvements

5. Avoid:
   - Nitpicking minor stylistic issues unless they significantly impact readability
   - Making assumptions about the broader context of the code without clear evidence
   - Using overly technical jargon without explanation

6. Format your review as follows:
   <review>
   [Your review comments here, following the guidelines above]
   </review>

Remember to maintain a professional and constructive tone throughout your review. Your goal is to help improve the code quality and support the developer's growth."#;

/// Opening delimiter wrapping the diff in the user message.
pub const DIFF_DELIMITER_OPEN: &str = "```<git diff>";
/// Closing delimiter wrapping the diff in the user message.
pub const DIFF_DELIMITER_CLOSE: &str = "</git diff>```";

/// Builds the two-message review prompt: the fixed system instructions (or a
/// configured override) followed by a user message embedding the diff verbatim
/// between [`DIFF_DELIMITER_OPEN`] and [`DIFF_DELIMITER_CLOSE`].
pub fn build_review_messages(diff: &str, system_prompt: Option<&str>) -> Vec<ChatMessage> {
    let system = system_prompt.unwrap_or(REVIEW_SYSTEM_PROMPT);
    let user = format!(
        "{}\n{}\n{}",
        DIFF_DELIMITER_OPEN, diff, DIFF_DELIMITER_CLOSE
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::message::Role;

    #[test]
    fn test_messages_are_system_then_user() {
        let messages = build_review_messages("+line", None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_system_message_is_fixed_prompt() {
        let messages = build_review_messages("+line", None);
        assert_eq!(messages[0].content, REVIEW_SYSTEM_PROMPT);
    }

    #[test]
    fn test_diff_embedded_verbatim_between_delimiters() {
        let diff = "diff --git a/f b/f\n-old\n+new\n";
        let messages = build_review_messages(diff, None);
        let expected = format!(
            "{}\n{}\n{}",
            DIFF_DELIMITER_OPEN, diff, DIFF_DELIMITER_CLOSE
        );
        assert_eq!(messages[1].content, expected);
        assert!(messages[1].content.contains(diff));
    }

    #[test]
    fn test_system_prompt_override() {
        let messages = build_review_messages("+line", Some("Review in haiku form."));
        assert_eq!(messages[0].content, "Review in haiku form.");
    }
}
