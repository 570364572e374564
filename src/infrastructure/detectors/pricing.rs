/// Prompt sizes above this count are billed at the higher Gemini tier.
const TIER_BOUNDARY_PROMPT_TOKENS: u64 = 128_000;

/// Estimated dollar cost of one Gemini 1.5 Flash call, rounded to six decimals.
pub fn gemini_flash_cost(prompt_tokens: u64, output_tokens: u64) -> f64 {
    let (input_per_million, output_per_million) = if prompt_tokens <= TIER_BOUNDARY_PROMPT_TOKENS {
        (0.075, 0.30)
    } else {
        (0.15, 0.60)
    };

    let input_cost = prompt_tokens as f64 / 1_000_000.0 * input_per_million;
    let output_cost = output_tokens as f64 / 1_000_000.0 * output_per_million;

    round_to_micros(input_cost + output_cost)
}

fn round_to_micros(dollars: f64) -> f64 {
    (dollars * 1_000_000.0).round() / 1_000_000.0
}
