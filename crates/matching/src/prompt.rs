use icebreak_common::error::{IcebreakError, IcebreakResult};

use crate::profiles::Profile;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant specialized in matchmaking based on Q&A data. Output JSON.";

/// Build the matchmaking prompt for `focal` over every grouped profile.
pub fn build_prompt(focal: &str, profiles: &[Profile]) -> IcebreakResult<String> {
    let participants = serde_json::to_string_pretty(profiles)
        .map_err(|e| IcebreakError::Internal(format!("failed to serialize profiles: {e}")))?;

    Ok(format!(
        "You are an expert matchmaker. Based on the following Q&A submissions from several people, \
         identify the best potential pairs.\n\
         For each person, suggest one or more other people they would be a good match with, \
         and give a brief reason for each pairing.\n\
         Consider shared interests, complementary personalities, or intriguing differences revealed in their answers.\n\
         The current user we are primarily generating pairs for is: {focal}.\n\
         Focus on good matches for {focal}, but also list other interesting pairs within the whole group.\n\n\
         Here is the data for all participants:\n\
         {participants}\n\n\
         Respond with a JSON object with a single key \"pairings\".\n\
         The value of \"pairings\" must be an array with one object per person, shaped like this:\n\
         {{\n  \"person\": \"Name1\",\n  \"matches\": [\n    \
         {{ \"match_with\": \"Name2\", \"reason\": \"Both love dogs and enjoy quiet nights in.\" }},\n    \
         {{ \"match_with\": \"Name3\", \"reason\": \"Name1's adventurous spirit complements Name3's planning skills.\" }}\n  \
         ]\n}}\n\
         Make sure the JSON is well-formed. Prioritize matches for {focal}."
    ))
}
