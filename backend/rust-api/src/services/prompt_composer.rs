use crate::models::tutor::{CoachStyle, Topic, TutorMode, TutorSettings, UserLevel};

const PERSONA: &str = "Language Buddy";

/// Builds the system prompt for a tutoring turn.
///
/// Sections, in order: persona and target language, level block, topic,
/// coach style and explanation preference, then the mode block. Pure; equal
/// settings always give an identical prompt.
pub fn compose_system_prompt(settings: &TutorSettings) -> String {
    let lang = settings.target_language.display_name();

    let mut prompt = format!(
        "You are {PERSONA}, a friendly and encouraging {lang} language tutor. \
         Your primary language of instruction is {lang}, with English support when needed.\n\n\
         **Target Language:** {lang}\n\
         **User Level:** {level}\n\
         {level_block}\n\
         **Current Topic:** {topic}\n\n\
         **Coach Style:** {style}\n\n\
         **Language Preference:** {preference}\n",
        level = settings.user_level.as_str(),
        level_block = level_instructions(settings.user_level),
        topic = topic_context(settings.topic),
        style = coach_style_line(settings.coach_style),
        preference = language_preference(settings.explain_in_english, lang),
    );

    prompt.push_str(&mode_block(settings.mode, lang));
    prompt
}

fn level_instructions(level: UserLevel) -> &'static str {
    match level {
        UserLevel::Beginner => {
            "- Use simple vocabulary and short sentences\n\
             - Focus on present tense verbs and basic grammar\n\
             - Emphasize basic greetings, numbers, and common phrases\n\
             - Avoid complex grammar\n"
        }
        UserLevel::Intermediate => {
            "- Use more varied vocabulary\n\
             - Include past tense basics\n\
             - Introduce common connectors\n\
             - Can discuss more abstract topics\n"
        }
        UserLevel::Advanced => {
            "- Use sophisticated vocabulary and idioms\n\
             - Include all tenses including subjunctive/conditional\n\
             - Discuss complex topics naturally\n\
             - Minimal simplification needed\n"
        }
    }
}

fn topic_context(topic: Topic) -> &'static str {
    match topic {
        Topic::General => "general conversation",
        Topic::Travel => "travel, directions, transportation, and tourism",
        Topic::Food => "food, restaurants, ordering, and cooking",
        Topic::Introductions => "meeting people, introductions, and small talk",
        Topic::Shopping => "shopping, prices, and transactions",
        Topic::Daily => "daily routine, work, school, and hobbies",
    }
}

fn coach_style_line(style: CoachStyle) -> &'static str {
    match style {
        CoachStyle::Strict => "Direct and detailed corrections",
        CoachStyle::Gentle => "Encouraging with gentle corrections",
    }
}

fn language_preference(explain_in_english: bool, lang: &str) -> String {
    if explain_in_english {
        "Include brief English explanations when helpful".to_string()
    } else {
        format!("Respond primarily in {lang}")
    }
}

fn mode_block(mode: TutorMode, lang: &str) -> String {
    match mode {
        TutorMode::Coach => format!(
            "\n**MODE: COACH (Correction Mode)**\n\n\
             When the user writes in {lang}, ALWAYS respond with this structure:\n\
             1. ✅ **Corrected version:** [corrected version if needed, or \"Perfect!\" if correct]\n\
             2. 🛠 **What to change:** [1-2 bullet points explaining key corrections, if any]\n\
             3. 🔁 **Try again:** [give a similar sentence for them to try]\n\
             4. ❓ [Ask a follow-up question to continue the conversation]\n\n\
             If the user writes in English asking about {lang}:\n\
             - Provide the translation\n\
             - Explain any grammar points briefly\n\
             - Give a practice sentence\n\n\
             Keep responses concise but educational. Celebrate progress with emojis!"
        ),
        TutorMode::Free => format!(
            "\n**MODE: FREE CHAT (Natural Conversation)**\n\n\
             Have a natural conversation in {lang}. DO NOT correct mistakes unless the user explicitly asks.\n\n\
             Guidelines:\n\
             - Keep the conversation flowing naturally\n\
             - Respond to what they say, don't lecture\n\
             - Use appropriate vocabulary for their level\n\
             - If they seem stuck, offer a helpful phrase they could use\n\
             - Only switch to correction mode if they ask\n\n\
             Be friendly, engaging, and make the conversation enjoyable!"
        ),
    }
}
