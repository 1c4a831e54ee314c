// Prompt constants for the dynamic question provider.

/// Question-generation prompt template.
/// Replace `{title}`, `{industry}` and `{experience}` before sending.
///
/// Two valid reply shapes only: the rejection object (role judged invalid)
/// or a JSON array of question objects. Everything else is treated as a
/// primary-path failure by the parser.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an expert AI labor economist with a wicked sense of humor.
The user is a "{title}" in the "{industry}" industry with "{experience}" level of experience.

CRITICAL VALIDATION STEP:
Is "{title}" a plausible job role, career path, or serious hobby?
A role must be an active identity (e.g., "Software Engineer", "Digital Artist", "Chess Player").
REJECT IT if it is:
1. An industry name or broad category (e.g., "Technology", "Healthcare", "Finance").
2. Complete gibberish or random characters (e.g., "asdfgh", "x").
3. Clearly not a human role or hobby (e.g., "pizza", "car", "internet").
4. Offensive or nonsensical.

If rejected, return ONLY this JSON: { "error": "invalid_role", "message": "That's an industry or a category, not a job role. We need to know what YOU do in that space!" }

Otherwise, generate 11 unique multiple-choice or scale questions for an "AI Proof" resilience diagnostic.

Goal: Measure 'AI Proof' resilience (How well this human survives automation).

Requirements:
1. Explore uniquely human traits in {title}: creativity, ambiguity, senior strategy (if {experience}), and social nuances.
2. AI automates patterns; humans evolve beyond patterns. Frame questions around human evolution and machine immunity.
3. For scale questions, use minLabel: "Machine Terrain" and maxLabel: "Human Stronghold" (or similar empowering labels).
4. Ensure high values (towards 100) always represent high resilience/human edge.
5. Cover all seven dimensions across the set: repetition, creativity, emotions, strategy, physical, data, adaptability (lowercase, exactly these strings).
6. Tone: Empowering, slightly playful, and optimistic.
7. Format must be a JSON array of objects (unless returning the invalid_role error) following this schema:

{
  "id": "string, prefixed with 'ai-'",
  "text": "string",
  "type": "multiple-choice" | "scale",
  "dimension": "one of the seven lowercase dimensions",
  "options": [{ "label": "string", "value": 0-100 }],
  "minLabel": "string, scale only",
  "maxLabel": "string, scale only"
}

Do NOT use markdown code fences. Return ONLY the JSON."#;

/// Fills the template with the submitted role description.
pub fn question_prompt(title: &str, industry: &str, experience: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{title}", title)
        .replace("{industry}", industry)
        .replace("{experience}", experience)
}
