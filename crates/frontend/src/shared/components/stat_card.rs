use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка одного показателя: иконка, подпись, значение
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// "success" / "warning" / "error" modifier
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", tone)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
