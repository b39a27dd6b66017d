// Prompt constants for job description generation.

/// Job description prompt template. Replace `{prompt}` before sending.
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = "As an expert HR professional, generate a \
    comprehensive and engaging job description based on the following details. \
    Include sections like Job Title, Responsibilities, Qualifications, and Benefits. \
    Make it suitable for an online job board:\n\n'{prompt}'";
