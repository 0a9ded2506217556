use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::estimate::format_price;
use crate::pricing::PricingToggle;

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();
    let toggle = use_state_eq(PricingToggle::default);
    let table_ref = use_node_ref();

    let onclick = {
        let toggle = toggle.clone();
        let table_ref = table_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if table_ref.get().is_none() {
                debug!("price toggle: no table mounted");
                return;
            }
            toggle.set(toggle.toggled());
        })
    };

    let table = if config.price_rows.is_empty() {
        html! {}
    } else {
        html! {
            <div
                id="prices-table"
                class="prices__table"
                data-prices=""
                hidden={toggle.is_hidden()}
                ref={table_ref}
            >
                <table>
                    <thead>
                        <tr>
                            <th>{"Service"}</th>
                            <th>{"Price"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for config.price_rows.iter().map(|row| html! {
                            <tr>
                                <td>{&row.service}</td>
                                <td>
                                    {format!("{} ", config.texts.price_prefix)}
                                    {format_price(row.price_from, &config.currency_suffix)}
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <section class="prices" id="prices">
            <h2>{"Prices"}</h2>
            <p class="prices__lead">
                {"Final price depends on distance and how hard it is to load the vehicle."}
            </p>
            <button
                type="button"
                class="btn btn--ghost"
                data-toggle-prices=""
                aria-controls="prices-table"
                aria-expanded={toggle.aria_expanded()}
                {onclick}
            >
                {toggle.label(&config.texts).to_string()}
            </button>
            {table}
        </section>
    }
}
