use leptos::prelude::*;

use crate::core::content::TEAM;
use crate::core::motion;
use crate::ui::animated::AnimatedHeading;
use crate::ui::cards::MemberCard;

/// "Our Team" roster grid
#[component]
pub fn TeamSection() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <AnimatedHeading text="Our Team" />
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4 md:gap-8">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(index, member)| {
                            view! {
                                <div class="card-rise h-full" style=motion::card_delay_style(index)>
                                    <MemberCard member=member />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_renders_every_member_once_in_order() {
        let html = render_html(|| view! { <TeamSection /> });
        assert_eq!(html.matches("member-card").count(), TEAM.len());

        let mut last = 0;
        for member in &TEAM {
            let at = html.find(member.photo_path).expect("photo rendered");
            assert!(at >= last, "{} out of order", member.name);
            assert_eq!(html.matches(member.photo_path).count(), 1);
            last = at;
        }
    }
}
