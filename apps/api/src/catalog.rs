//! The fixed, versioned catalog of diagnostic questions.
//!
//! This is the offline half of the question supply: the fallback matcher
//! selects from it by tag overlap, and the blended path samples from it
//! even when generation succeeds. Ids are stable — scoring and the
//! presentation layer key on them.

use crate::models::{ChoiceOption, Dimension, Question, QuestionType};

/// Bumped whenever catalog content changes.
pub const CATALOG_VERSION: u32 = 2;

fn scale(
    id: &str,
    text: &str,
    dimension: Dimension,
    tags: &[&str],
    min_label: &str,
    max_label: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionType::Scale,
        dimension,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        options: vec![],
        min_label: Some(min_label.to_string()),
        max_label: Some(max_label.to_string()),
    }
}

fn choice(
    id: &str,
    text: &str,
    dimension: Dimension,
    tags: &[&str],
    options: &[(&str, u8)],
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionType::MultipleChoice,
        dimension,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        options: options
            .iter()
            .map(|(label, value)| ChoiceOption {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
        min_label: None,
        max_label: None,
    }
}

/// Builds the full catalog. Every question carries exactly one dimension;
/// option values and scale endpoints are calibrated so that higher always
/// means more resilient.
pub fn catalog() -> Vec<Question> {
    vec![
        scale(
            "rep-1",
            "How often does your work require you to break away from predictable patterns and handle unique, non-repeating situations?",
            Dimension::Repetition,
            &["admin", "finance", "logistics"],
            "Machine Terrain (Automation)",
            "Human Stronghold (Resilience)",
        ),
        scale(
            "cre-1",
            "When faced with a unique challenge, how often do you have to innovate a solution that outpaces any existing documentation?",
            Dimension::Creativity,
            &["design", "tech", "engineering", "writing"],
            "The Manual (Pattern-Match)",
            "Pure Innovation (Resilient)",
        ),
        choice(
            "emo-1",
            "How critical is 'reading the room' or managing human emotions to your daily success?",
            Dimension::Emotions,
            &["management", "sales", "healthcare", "hr"],
            &[
                ("Data only, emotions are irrelevant", 5),
                ("Predictable social patterns", 30),
                ("Meaningful empathy & connection", 70),
                ("Navigating deep human complexity", 100),
            ],
        ),
        scale(
            "str-1",
            "How multi-layered are the strategic 'ripple effects' triggered by your typical creative or professional decisions?",
            Dimension::Strategy,
            &["leadership", "finance", "legal"],
            "One-step logic",
            "Chaos-proof Strategy",
        ),
        choice(
            "phy-1",
            "How much of your work requires precise physical manipulation of objects in an unpredictable environment?",
            Dimension::Physical,
            &["healthcare", "construction", "manufacturing"],
            &[
                ("Zero physical interaction", 5),
                ("Predictable movements", 35),
                ("Unpredictable environment", 75),
                ("High-dexterity unique tasks", 100),
            ],
        ),
        scale(
            "dat-1",
            "How much interpretation, nuance, and 'gut feeling' goes into how you translate structured data into action?",
            Dimension::Data,
            &["finance", "tech", "science"],
            "Raw Data Patterns",
            "Human Insight",
        ),
        choice(
            "ada-1",
            "How often does your job require you to learn a completely new skill that didn't exist 3 years ago?",
            Dimension::Adaptability,
            &["tech", "design", "marketing"],
            &[
                ("Stable patterns", 5),
                ("Incremental changes", 35),
                ("Constant evolution", 75),
                ("Pioneering new unknowns", 100),
            ],
        ),
        scale(
            "cre-2",
            "Could a really smart parrot (or a really good LLM) mimic your writing/coding style perfectly?",
            Dimension::Creativity,
            &["writing", "tech", "content"],
            "Easily, I'm very standard",
            "Impossible, I'm too weird",
        ),
        choice(
            "rep-2",
            "Settle a debate: Is your job more like Chess (predictable rules) or more like Poker (incomplete info + bluffing)?",
            Dimension::Repetition,
            &["management", "sales", "legal"],
            &[
                ("Chess - I follow the optimal moves", 90),
                ("Mostly Chess, some intuition", 60),
                ("Mostly Poker, heavy intuition", 30),
                ("Poker - It's all about the 'vibe' and unknowns", 10),
            ],
        ),
        scale(
            "str-2",
            "How many people's lives or livelihoods are directly affected by your 'gut feeling' decisions?",
            Dimension::Strategy,
            &["leadership", "healthcare", "government"],
            "Just me",
            "Countless others",
        ),
        scale(
            "cre-3",
            "In your role, how often do you have to 'lie' or use creatively flexible truths (e.g. fiction, marketing, acting)?",
            Dimension::Creativity,
            &["marketing", "entertainment", "sales"],
            "Strict facts only",
            "Creative storytelling",
        ),
        scale(
            "emo-2",
            "How often do you deal with people who are having the worst day of their lives?",
            Dimension::Emotions,
            &["healthcare", "legal", "customer service"],
            "Never, they are vibing",
            "Literally every hour",
        ),
        choice(
            "ada-2",
            "How quickly could you explain your job to a Victorian-era person without them fainting?",
            Dimension::Adaptability,
            &["tech", "science", "design"],
            &[
                ("Easily - I handle goods or land", 10),
                ("With some effort - I manage people", 40),
                ("Hard - I work with invisible signals", 70),
                ("Impossible - They'd think I was a sorcerer", 100),
            ],
        ),
        scale(
            "dat-2",
            "If the internet went down globally for 24 hours, what percentage of your 'work' could you still finish?",
            Dimension::Data,
            &["admin", "tech", "finance"],
            "Can't even use the toilet",
            "I'd keep crushing it",
        ),
        scale(
            "phy-2",
            "Could a robot with no sense of smell or touch perform your primary physical task?",
            Dimension::Physical,
            &["hospitality", "manufacturing", "healthcare"],
            "Yes, it's just mechanics",
            "No, sensory feedback is life",
        ),
        choice(
            "cre-4",
            "How often do you brainstorm things that don't exist yet?",
            Dimension::Creativity,
            &["design", "product", "writing"],
            &[
                ("Rarely, I optimize what's there", 10),
                ("Sometimes, usually small features", 50),
                ("Frequently, it's my core value", 80),
                ("Always, I'm a professional visionary", 100),
            ],
        ),
        scale(
            "str-3",
            "How much of your job involves navigating office politics or power dynamics?",
            Dimension::Strategy,
            &["management", "corporate", "hr"],
            "I work alone",
            "Game of Thrones level",
        ),
        scale(
            "emo-3",
            "Can a user tell if you are answering them with 'canned' responses vs. genuine care?",
            Dimension::Emotions,
            &["customer service", "hospitality", "sales"],
            "They can't tell the difference",
            "It's obvious I'm human",
        ),
        scale(
            "rep-3",
            "If you recorded your work screen for 8 hours, how repetitive would the time-lapse look?",
            Dimension::Repetition,
            &["data entry", "admin", "manufacturing"],
            "Kaleidoscope of chaos",
            "A loop of 10 seconds",
        ),
        choice(
            "ada-3",
            "How often do you have to pivot your strategy because a competitor or a platform changed their algorithm?",
            Dimension::Adaptability,
            &["marketing", "tech", "content"],
            &[
                ("Never", 0),
                ("Annually", 30),
                ("Monthly", 70),
                ("I am literally a squirrel in traffic", 100),
            ],
        ),
    ]
}
