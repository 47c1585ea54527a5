// Prompt template for resume analysis.
// Inputs are substituted verbatim; the result is model input, never executed.

/// Resume-vs-job prompt. Replace `{job_description}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Compare the following **resume** with the **job description** and provide a rating out of 10 based on relevance.
Suggest specific improvements and missing skills.

**Job Description:**
{job_description}

**Resume:**
{resume_text}

Provide a **rating out of 10**, followed by a **brief explanation** of the strengths, weaknesses, and improvements of the resume."#;

/// Builds the analysis prompt.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    // Resume text goes in second so a literal "{resume_text}" inside the job
    // description is not expanded.
    let (head, tail) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));
    let head = head.replace("{job_description}", job_description);
    format!("{head}{resume_text}{tail}")
}
