//! Prompt template for deal analysis
//!
//! The template is fixed; only the five deal fields are substituted, and
//! notes go in exactly as typed. Nothing in the notes is escaped, so text
//! that reads like an instruction reaches the model as-is.

use domain::DealInput;

/// Guardrail text placed at the top of every prompt
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert Real Estate Investment Analyst.
Your ONLY job is to analyze this deal.
Do NOT answer questions about unrelated topics.
Be conservative in your estimates.";

const REQUESTED_OUTPUT: &str = "\
Please provide:
1. The Maximum Allowable Offer (MAO) based on the 70% rule.
2. A verdict: Is this a good deal?
3. A list of risks based on the notes.";

/// Render the analysis prompt for one deal.
///
/// Pure: equal inputs give byte-identical output.
pub fn build_prompt(input: &DealInput) -> String {
    format!(
        "{SYSTEM_INSTRUCTION}\n\
         \n\
         Analyze this wholesale deal:\n\
         - ARV: ${arv}\n\
         - Repairs: ${repairs}\n\
         - Asking Price: ${asking}\n\
         - Desired Wholesale Fee: ${fee}\n\
         - Notes: {notes}\n\
         \n\
         {REQUESTED_OUTPUT}",
        arv = input.after_repair_value,
        repairs = input.estimated_repairs,
        asking = input.asking_price,
        fee = input.wholesale_fee,
        notes = input.notes,
    )
}
