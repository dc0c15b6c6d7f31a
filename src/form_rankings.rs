use std::cmp::Ordering;

use crate::error::{FormError, Result};
use crate::model::PlayerForm;

/// Sum of the last `window` points; shorter sequences sum whatever they have.
pub fn form_score(form: &PlayerForm, window: usize) -> i64 {
    let start = form.points.len().saturating_sub(window);
    form.points[start..].iter().sum()
}

/// Top `n` players by form over the last `window` gameweeks, best first.
/// Ties fall back to name, then player id, so the order is fully determined by the input values.
pub fn top_performers(forms: &[PlayerForm], n: usize, window: usize) -> Result<Vec<PlayerForm>> {
    if n == 0 {
        return Err(FormError::invalid_argument("performer count must be at least 1"));
    }
    if window == 0 {
        return Err(FormError::invalid_argument("gameweek window must be at least 1"));
    }

    let mut scored: Vec<(i64, &PlayerForm)> =
        forms.iter().map(|f| (form_score(f, window), f)).collect();
    scored.sort_by(|(sa, a), (sb, b)| compare_ranked(*sa, a, *sb, b));

    Ok(scored
        .into_iter()
        .take(n)
        .map(|(_, form)| form.clone())
        .collect())
}

fn compare_ranked(sa: i64, a: &PlayerForm, sb: i64, b: &PlayerForm) -> Ordering {
    sb.cmp(&sa)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.player_id.cmp(&b.player_id))
}
