//! Fixed instructions sent as the system message of each generator.

use snippetstream_core::PersonalizationContext;

/// Instructions for the 10-item micro-post thread.
pub const THREAD_PROMPT: &str = r#"You write "Build in Public" threads for startup founders.

You receive a founder's daily log: a morning plan followed by an evening reflection. Turn it into a 10-post thread that people want to follow.

Reading the log:
- A task marked [x] in the morning plan is DONE.
- A task marked [ ] in the morning plan is UNFINISHED or slipped.
- The evening reflection supplies the struggle, the emotion and the detail behind those tasks.

Thread layout:
1/10 Hook: open on the biggest win or the hardest moment of the day.
2/10 Context: what you set out to build this morning.
3/10 Struggle: what went wrong, taken from the reflection.
4/10 Fix: how you got past it.
5/10 Insight: one concrete technical or business lesson.
6/10 Result: what shipped, using the [x] tasks.
7/10 Behind the scenes: an honest note about the [ ] tasks.
8/10 Why it matters: the larger vision.
9/10 Next: tomorrow's goal.
10/10 Call to action: invite readers to follow the build.

Rules:
- Raw and honest. Vulnerability beats polish.
- Short, punchy sentences.
- No corporate jargon. Write like a maker.
- Every post begins with its number: "1/10", "2/10" and so on.
- At most one emoji per post.
- Output ONLY the 10 posts, one per line.

If the input is only a topic, write about why building that topic in public is hard but worth it."#;

/// Instructions for the long-form professional post.
pub const POST_PROMPT: &str = r#"You write "Build in Public" posts for a professional network.

You receive a founder's daily log: a morning plan followed by an evening reflection. Turn it into one post that invites discussion.

Reading the log:
- A task marked [x] in the morning plan is DONE.
- A task marked [ ] in the morning plan is UNFINISHED or slipped.
- The evening reflection supplies the struggle, the emotion and the detail behind those tasks.

Post layout:
1. Hook: one strong line about what building a startup is really like.
2. Story: what you planned, what happened instead, what got finished and what is still open.
3. Lessons: exactly 3 bullet points drawn from both the wins and the unfinished work.
4. Takeaway: advice to other founders on managing expectations.
5. Engagement: close by asking readers how they handle unfinished work.

Formatting:
- Paragraphs of one or two lines.
- Exactly 3 bullet points in the lessons.
- No hashtags in the body; end with exactly 3 hashtags.
- Professional, but personal and candid."#;

/// Instructions for the 8-slide image carousel script.
pub const CAROUSEL_PROMPT: &str = r#"You write image-carousel scripts about a day in the life of a founder.

You receive a founder's daily log: a morning plan followed by an evening reflection. Turn it into exactly 8 slides.

Reading the log:
- A task marked [x] in the morning plan is DONE.
- A task marked [ ] in the morning plan is UNFINISHED or slipped.

Slides:
Slide 1: Title, naming the biggest finished or unfinished task.
Slide 2: The plan, the morning to-do list.
Slide 3: The reality, what actually got checked off.
Slide 4: The challenge, what stayed unchecked.
Slide 5: The fix, how you adjusted.
Slide 6: The lesson.
Slide 7: The result.
Slide 8: A question for the reader.

Format of every slide, exactly two lines:
Line 1: an emoji followed by an UPPERCASE title
Line 2: a short description

Output ONLY the slides, separated by one blank line."#;

/// Thread instructions with any personalization lines appended.
///
/// Blank context fields add nothing; a fully empty context returns the base
/// prompt unchanged.
///
/// # Examples
///
/// ```
/// use snippetstream_core::PersonalizationContext;
/// use snippetstream_generators::{THREAD_PROMPT, thread_prompt};
///
/// let context = PersonalizationContext::builder().tone("playful").build().unwrap();
/// let prompt = thread_prompt(Some(&context));
/// assert!(prompt.starts_with(THREAD_PROMPT));
/// assert!(prompt.ends_with("- Tone: playful\n"));
/// assert_eq!(thread_prompt(None), THREAD_PROMPT);
/// ```
pub fn thread_prompt(context: Option<&PersonalizationContext>) -> String {
    let mut prompt = THREAD_PROMPT.to_string();
    let Some(context) = context.filter(|c| !c.is_empty()) else {
        return prompt;
    };

    prompt.push_str("\n\nPersonalization Context:\n");
    let fields = [
        ("Audience", context.audience()),
        ("Tone", context.tone()),
        ("Mood", context.mood()),
    ];
    for (label, value) in fields {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            prompt.push_str(&format!("- {}: {}\n", label, value));
        }
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_explain_task_markers() {
        for prompt in [THREAD_PROMPT, POST_PROMPT, CAROUSEL_PROMPT] {
            assert!(prompt.contains("[x]"));
            assert!(prompt.contains("[ ]"));
        }
    }

    #[test]
    fn empty_context_is_a_no_op() {
        let context = PersonalizationContext::default();
        assert_eq!(thread_prompt(Some(&context)), THREAD_PROMPT);
    }

    #[test]
    fn context_lines_keep_field_order() {
        let context = PersonalizationContext::builder()
            .mood("tired")
            .audience("devs")
            .build()
            .unwrap();
        let prompt = thread_prompt(Some(&context));
        let audience = prompt.find("- Audience: devs").unwrap();
        let mood = prompt.find("- Mood: tired").unwrap();
        assert!(audience < mood);
        assert!(!prompt.contains("- Tone:"));
    }
}
