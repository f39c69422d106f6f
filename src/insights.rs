use crate::format::format_currency;
use crate::models::Insights;

/// One-line spending insight, e.g.
/// "You spent most on Food. Your highest single expense was ₹1,200.00."
pub fn insight_sentence(insights: &Insights, currency_symbol: &str) -> String {
    let mut text = String::new();
    if let Some(category) = insights.top_category.as_deref().filter(|c| !c.is_empty()) {
        text.push_str(&format!("You spent most on {category}. "));
    }
    if insights.highest_expense > 0.0 {
        text.push_str(&format!(
            "Your highest single expense was {}.",
            format_currency(insights.highest_expense, currency_symbol)
        ));
    }
    text.trim_end().to_string()
}

pub fn top_category_label(insights: &Insights) -> &str {
    insights
        .top_category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sentence() {
        let insights = Insights {
            total_transactions: 4,
            highest_expense: 1200.0,
            top_category: Some("Food".into()),
        };
        assert_eq!(
            insight_sentence(&insights, "₹"),
            "You spent most on Food. Your highest single expense was ₹1,200.00."
        );
        assert_eq!(top_category_label(&insights), "Food");
    }

    #[test]
    fn test_sentence_without_expenses() {
        let insights = Insights {
            total_transactions: 1,
            highest_expense: 0.0,
            top_category: None,
        };
        assert_eq!(insight_sentence(&insights, "₹"), "");
        assert_eq!(top_category_label(&insights), "-");
    }

    #[test]
    fn test_sentence_with_category_only() {
        let insights = Insights {
            top_category: Some("Transport".into()),
            ..Default::default()
        };
        assert_eq!(insight_sentence(&insights, "$"), "You spent most on Transport.");
    }
}
