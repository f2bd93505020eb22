// tests/common/mod.rs
//
// HTML fixtures shaped like the IBE availability page.
#![allow(dead_code)]

pub struct Flight<'a> {
    pub no: &'a str,
    pub dep: &'a str,
    pub arr: &'a str,
    pub duration: &'a str,
    pub stops: &'a str,
}

pub fn flight(no: &str) -> Flight<'_> {
    Flight { no, dep: "07:30", arr: "08:45", duration: "1h 15m", stops: "Non Stop" }
}

pub fn detail_block(f: &Flight<'_>) -> String {
    format!(
        r#"<div class="info-row col-12">
             <div class="left"><span class="time">{dep}</span><span class="port">DAR</span></div>
             <div class="middle">
               <span class="flight-duration">
                 {duration}
               </span>
               <span class="total-stop"> {stops} </span>
             </div>
             <div class="right"><span class="time">{arr}</span><span class="port">ARK</span></div>
             <div class="flight-no">{no}</div>
           </div>"#,
        dep = f.dep,
        arr = f.arr,
        duration = f.duration,
        stops = f.stops,
        no = f.no,
    )
}

/// `None` renders a fare container with no promotional offer.
pub fn fare_block(promo: Option<&str>) -> String {
    let offer = match promo {
        Some(price) => format!(
            r#"<div class="offer-info-block cabin-name-PROMOTION">
                 <span class="currency">USD</span>
                 <span class="price">
                   {price}
                 </span>
               </div>"#
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="fare-container col-12 col-lg-8 col-xl-8">
             {offer}
             <div class="offer-info-block cabin-name-ECONOMY"><span>USD 300.00</span></div>
           </div>"#
    )
}

/// Detail and fare blocks in separate columns, as the site lays them out.
pub fn page(details: &[String], fares: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Availability</title></head><body>\
         <div class=\"flights\">{}</div><div class=\"fares\">{}</div></body></html>",
        details.concat(),
        fares.concat()
    )
}

pub fn standard_page(n_details: usize, n_fares: usize) -> String {
    let details: Vec<String> = (0..n_details)
        .map(|i| detail_block(&flight(&format!("PW {}", 700 + i))))
        .collect();
    let fares: Vec<String> = (0..n_fares)
        .map(|i| fare_block(Some(&format!("{}.00", 100 + i))))
        .collect();
    page(&details, &fares)
}
