use yew::prelude::*;

use crate::components::calculator::{CalcForm, PresetService, ServicePreset};
use crate::components::header::Header;
use crate::components::lead_form::LeadForm;
use crate::components::menu::OffCanvasMenu;
use crate::components::modal::Modal;
use crate::components::pricing::PricingSection;
use crate::components::triggers::{CalcButton, LeadButton};
use crate::estimate::Service;
use crate::overlay::{CALC_MODAL, LEAD_MODAL};

fn service_blurb(service: Service) -> &'static str {
    match service {
        Service::Tow => "Cars, SUVs and motorcycles to any address in the city and region.",
        Service::Tech => "Jump start, wheel change and unlocking right where you stopped.",
        Service::Fuel => "We bring enough fuel to get you to the nearest station.",
        Service::Sober => "A driver takes you and your car home safely.",
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let preset = use_state_eq(|| None::<ServicePreset>);

    let set_preset = {
        let preset = preset.clone();
        PresetService(Callback::from(move |service: Service| {
            preset.set(Some(ServicePreset::next(*preset, service)));
        }))
    };

    html! {
        <ContextProvider<PresetService> context={set_preset}>
            <Header />
            <OffCanvasMenu />

            <main id="top">
                <section class="hero">
                    <h1>{"Tow truck and roadside help, 24/7"}</h1>
                    <p class="hero__lead">
                        {"A crew arrives in 20–40 minutes. Fixed price agreed before we leave."}
                    </p>
                    <div class="hero__actions">
                        <LeadButton class="btn btn--primary" label="Request a call" />
                        <CalcButton class="btn btn--ghost" label="Estimate the price" />
                    </div>
                </section>

                <section class="services" id="services">
                    <h2>{"Services"}</h2>
                    <div class="services__grid">
                        { for Service::ALL.iter().map(|&service| html! {
                            <article class="service-card" key={service.as_str()}>
                                <h3>{service.label()}</h3>
                                <p>{service_blurb(service)}</p>
                                <CalcButton
                                    class="btn btn--small"
                                    label="Estimate"
                                    service={Some(service)}
                                />
                            </article>
                        }) }
                    </div>
                </section>

                <section class="calculator" id="calculator">
                    <h2>{"Quick estimate"}</h2>
                    <CalcForm />
                </section>

                <PricingSection />

                <section class="contacts" id="contacts">
                    <h2>{"Leave a request"}</h2>
                    <LeadForm />
                </section>
            </main>

            <Modal name={LEAD_MODAL} title="Request a call">
                <LeadForm compact={true} />
            </Modal>
            <Modal name={CALC_MODAL} title="Price estimate">
                <CalcForm preset={*preset} />
            </Modal>
        </ContextProvider<PresetService>>
    }
}
