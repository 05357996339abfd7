use contracts::enums::work_order_status::WorkOrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_css = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_css(), additional_class())>
            {children()}
        </span>
    }
}

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Вариант бейджа для статуса заявки
pub fn status_variant(status: WorkOrderStatus) -> &'static str {
    match status {
        WorkOrderStatus::New => "primary",
        WorkOrderStatus::Assigned | WorkOrderStatus::InProgress => "warning",
        WorkOrderStatus::Completed => "success",
        WorkOrderStatus::Cancelled => "error",
        WorkOrderStatus::Unknown => "neutral",
    }
}

/// Status badge component for work order states
#[component]
pub fn StatusBadge(status: WorkOrderStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", variant_class(status_variant(status)))>
            {status.display_name()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(WorkOrderStatus::Completed), "success");
        assert_eq!(variant_class(status_variant(WorkOrderStatus::Cancelled)), "badge--error");
        assert_eq!(variant_class("unexpected"), "badge--neutral");
    }
}
