use leptos::prelude::*;

use crate::core::content::FEATURES;
use crate::core::motion;
use crate::ui::animated::AnimatedHeading;
use crate::ui::cards::FeatureCard;

/// "Key Features" grid, cards rising in one after another
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-b from-gray-900 to-blue-900">
            <div class="container mx-auto px-4">
                <AnimatedHeading text="Key Features" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <div class="card-rise" style=motion::card_delay_style(index)>
                                    <FeatureCard feature=feature />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
