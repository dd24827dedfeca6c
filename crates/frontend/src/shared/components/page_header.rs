use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader — шапка страницы с кнопкой «назад», заголовком и подзаголовком.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Обработчик кнопки «назад»; без него кнопка не выводится.
    #[prop(optional)]
    on_back: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {on_back.map(|cb| view! {
                    <Button
                        variant="ghost"
                        class="page-header__back"
                        on_click=Callback::new(move |_| cb.run(()))
                    >
                        {icon("arrow-left")}
                    </Button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
