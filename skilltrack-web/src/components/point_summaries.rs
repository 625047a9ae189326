use skilltrack_core::PointSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: PointSummary,
}

#[function_component(PointSummaries)]
pub fn point_summaries(p: &Props) -> Html {
    let next = p.summary.points_to_next.map_or_else(
        || "Top of the ladder".to_string(),
        |points| format!("{points} to next title"),
    );
    html! {
        <table class="point-summaries">
            <tbody>
                <tr>
                    <th scope="row">{ "Total points" }</th>
                    <td class="point-summaries__total">{ p.summary.total }</td>
                </tr>
                { for p.summary.by_category.iter().map(|(category, points)| html! {
                    <tr key={category.label()}>
                        <th scope="row">{ category.label() }</th>
                        <td>{ *points }</td>
                    </tr>
                }) }
                <tr>
                    <th scope="row">{ "Next" }</th>
                    <td>{ next }</td>
                </tr>
            </tbody>
        </table>
    }
}
