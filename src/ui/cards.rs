//! Presentational cards for the feature grid and the team roster.

use leptos::prelude::*;

use crate::core::content::{FeatureItem, TeamMember};
use crate::ui::common::Card;
use crate::ui::icon::Icon;

/// Feature card: glyph badge, title and description
#[component]
pub fn FeatureCard(feature: &'static FeatureItem) -> impl IntoView {
    view! {
        <div class="feature-card hover-spring h-full">
            <Card class="h-full bg-gradient-to-br from-gray-900 to-gray-800 overflow-hidden group">
                <div class="flex flex-col space-y-1.5 p-6">
                    <div class="mb-4 p-3 bg-blue-500 rounded-full w-16 h-16 flex items-center justify-center
                                group-hover:bg-purple-500 transition-colors duration-300">
                        <Icon glyph=feature.icon class="w-8 h-8 text-white" />
                    </div>
                    <h3 class="text-xl md:text-2xl font-semibold mb-2 text-blue-400 group-hover:text-purple-400 transition-colors duration-300">
                        {feature.title}
                    </h3>
                    <p class="text-gray-300">{feature.description}</p>
                </div>
            </Card>
        </div>
    }
}

/// Member card: round photo, name and role
#[component]
pub fn MemberCard(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="member-card hover-spring h-full">
            <Card class="h-full flex flex-col items-center justify-between p-3 md:p-6 text-center bg-gray-800/50">
                <div class="relative w-20 h-20 md:w-24 md:h-24 lg:w-32 lg:h-32 mx-auto mb-2 md:mb-4">
                    <img
                        src=member.photo_path
                        alt=member.name
                        loading="lazy"
                        class="absolute inset-0 w-full h-full rounded-full object-cover border-4 border-blue-400"
                    />
                </div>
                <div>
                    <h3 class="text-sm md:text-lg font-semibold mb-1">{member.name}</h3>
                    <p class="text-xs md:text-sm text-gray-400">{member.role}</p>
                </div>
            </Card>
        </div>
    }
}
