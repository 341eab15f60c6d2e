use crate::classifier::TrainedRuleList;

/// Renders a fitted list as ordered `IF .. THEN ..` lines.
///
/// The output is derived purely from `d_star`, `theta`, `ci_theta`, and
/// the itemset arena; an untrained model renders as a fixed placeholder.
pub fn describe(model: &TrainedRuleList) -> String {
    let d_star = match &model.d_star {
        Some(list) => list,
        None => return "(untrained rule list)".to_string(),
    };

    let header = if model.class1_label == "class 1" {
        "Trained rule list".to_string()
    } else {
        format!("Trained rule list for detecting {}", model.class1_label)
    };
    let separator = "=".repeat(header.len());

    let mut lines = Vec::with_capacity(d_star.len() + 1);
    for (position, &rule) in d_star.as_slice().iter().enumerate() {
        lines.push(format!(
            "ELSE IF {} THEN probability of {}: {}",
            model.itemsets[rule],
            model.class1_label,
            rendered_estimate(model, position),
        ));
    }
    lines.push(format!(
        "ELSE probability of {}: {}",
        model.class1_label,
        rendered_estimate(model, d_star.len()),
    ));

    let mut body = lines.join("\n");
    if let Some(stripped) = body.strip_prefix("ELSE ") {
        body = stripped.to_string();
    }
    format!("{header}\n{separator}\n{body}\n")
}

fn rendered_estimate(model: &TrainedRuleList, position: usize) -> String {
    let (lo, hi) = model.ci_theta[position];
    format!(
        "{:.1}% ({:.1}%-{:.1}%)",
        model.theta[position] * 100.0,
        lo * 100.0,
        hi * 100.0
    )
}
