use contracts::system::users::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::EMPTY_CELL;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::profile::api;

/// Состояние загрузки профиля
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLoad {
    Loading,
    Loaded(UserProfile),
    Failed(String),
}

impl ProfileLoad {
    pub fn from_result(result: Result<UserProfile, ApiError>) -> Self {
        match result {
            Ok(profile) => ProfileLoad::Loaded(profile),
            Err(e) => ProfileLoad::Failed(format!("Не удалось загрузить профиль: {}", e)),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileLoad::Loading);

    let load = move || {
        state.set(ProfileLoad::Loading);
        spawn_local(async move {
            let result = api::fetch_profile().await;
            if let Err(e) = &result {
                log::error!("Ошибка загрузки профиля: {}", e);
            }
            state.try_set(ProfileLoad::from_result(result));
        });
    };

    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Профиль"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || match state.get() {
                    ProfileLoad::Loading => view! {
                        <div class="page__loading">
                            <thaw::Spinner />
                        </div>
                    }.into_any(),
                    ProfileLoad::Failed(message) => view! {
                        <div class="alert alert--error">{message}</div>
                    }.into_any(),
                    ProfileLoad::Loaded(profile) => view! { <ProfileDetails profile=profile /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn ProfileDetails(profile: UserProfile) -> impl IntoView {
    let stats = profile.stats;
    let contact = |value: Option<String>| value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| EMPTY_CELL.to_string());

    view! {
        <div class="profile">
            <div class="profile__card">
                <h2 class="profile__name">{profile.full_name}</h2>
                <div class="profile__role">{profile.role.display_name()}</div>
                <dl class="profile__contacts">
                    <dt>"Телефон"</dt>
                    <dd>{contact(profile.phone)}</dd>
                    <dt>"Email"</dt>
                    <dd>{contact(profile.email)}</dd>
                </dl>
            </div>

            <div class="profile__stats">
                <StatCard label="Всего заявок" icon_name="tasks" value=stats.total_tasks.to_string() />
                <StatCard
                    label="Выполнено"
                    icon_name="history"
                    value=stats.completed_tasks.to_string()
                    subtitle=format_percent(stats.completion_rate())
                    tone="success"
                />
                <StatCard
                    label="В работе"
                    icon_name="tool"
                    value=stats.in_progress_tasks.to_string()
                    tone="warning"
                />
                <StatCard label="Заработано" icon_name="user" value=format_money(stats.total_earnings) />
            </div>
        </div>
    }
}
