use crate::domain::entities::offer::Offer;
use crate::domain::ranking::rank_by_apr;

/// One offer as a Markdown block.
pub fn render_offer(offer: &Offer) -> String {
    let term = match offer.duration_days {
        Some(days) => format!("{days} days"),
        None => "flexible".to_string(),
    };
    let min_amount = match offer.min_amount {
        Some(amount) => format!("{amount} {}", offer.asset),
        None => "none".to_string(),
    };

    format!(
        "Exchange: *{}*\n\
         Asset: *{}*\n\
         Product type: *{}*\n\
         APR: *{:.2}%*\n\
         Term: *{term}*\n\
         Min. amount: *{min_amount}*",
        offer.exchange,
        offer.asset,
        offer.product_type,
        offer.apr_percent(),
    )
}

pub fn render_header(asset: Option<&str>) -> String {
    let mut header = "🔥 *Top Simple Earn offers by APR*".to_string();
    if let Some(asset) = asset {
        header.push_str(&format!(" for *{asset}*"));
    }
    header.push_str(":\n");
    header
}

/// Numbered list under a header. Callers handle the empty case themselves.
pub fn render_top_list(offers: &[Offer], asset: Option<&str>) -> String {
    let mut parts = vec![render_header(asset)];
    for (i, offer) in offers.iter().enumerate() {
        parts.push(format!("*#{}*\n{}\n", i + 1, render_offer(offer)));
    }
    parts.join("\n")
}

pub fn rank_and_format(offers: Vec<Offer>, top_n: usize, asset: Option<&str>) -> String {
    render_top_list(&rank_by_apr(offers, top_n), asset)
}
