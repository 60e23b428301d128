//! World Manufacturer Identifier (WMI) lookup.
//!
//! Most manufacturers are identified by the full 3-character WMI. Small
//! manufacturers (fewer than 1000 vehicles a year) share a WMI ending in
//! `9`, so some entries are keyed by the 2-character prefix alone.

/// Look up a manufacturer by its 3-character WMI, falling back to the
/// 2-character prefix when the full code is not assigned.
pub fn manufacturer_for(code3: &str, code2_fallback: &str) -> Option<&'static str> {
    lookup(code3).or_else(|| lookup(code2_fallback))
}

fn lookup(code: &str) -> Option<&'static str> {
    MANUFACTURERS
        .binary_search_by_key(&code, |&(code, _)| code)
        .ok()
        .map(|idx| MANUFACTURERS[idx].1)
}

/// Manufacturer codes and names.
/// Sorted by code for binary search.
static MANUFACTURERS: &[(&str, &str)] = &[
    ("1B3", "Dodge"),
    ("1C3", "Chrysler"),
    ("1C4", "Chrysler"),
    ("1C6", "Chrysler"),
    ("1D3", "Dodge"),
    ("1FA", "Ford"),
    ("1FB", "Ford"),
    ("1FC", "Ford"),
    ("1FD", "Ford"),
    ("1FM", "Ford"),
    ("1FT", "Ford"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1G", "General Motors"),
    ("1G1", "Chevrolet"),
    ("1G2", "Pontiac"),
    ("1G3", "Oldsmobile"),
    ("1G4", "Buick"),
    ("1G6", "Cadillac"),
    ("1GC", "Chevrolet Truck"),
    ("1GM", "Pontiac"),
    ("1GT", "GMC Truck"),
    ("1HD", "Harley-Davidson"),
    ("1HG", "Honda USA"),
    ("1J4", "Jeep"),
    ("1L", "Lincoln"),
    ("1LN", "Lincoln"),
    ("1M8", "Motor Coach Industries"),
    ("1ME", "Mercury"),
    ("1N4", "Nissan USA"),
    ("1VW", "Volkswagen USA"),
    ("1YV", "Mazda USA"),
    ("2C3", "Chrysler Canada"),
    ("2FA", "Ford Canada"),
    ("2G1", "Chevrolet Canada"),
    ("2HG", "Honda Canada"),
    ("2HM", "Hyundai Canada"),
    ("2T1", "Toyota Canada"),
    ("3FA", "Ford Mexico"),
    ("3G1", "Chevrolet Mexico"),
    ("3N1", "Nissan Mexico"),
    ("3VW", "Volkswagen Mexico"),
    ("4F2", "Mazda USA"),
    ("4S3", "Subaru USA"),
    ("4T1", "Toyota USA"),
    ("4US", "BMW USA"),
    ("5FN", "Honda USA"),
    ("5UX", "BMW USA"),
    ("5YJ", "Tesla"),
    ("6F", "Ford Australia"),
    ("6G", "General Motors Holden"),
    ("6H", "General Motors Holden"),
    ("6T1", "Toyota Australia"),
    ("7A3", "Honda New Zealand"),
    ("8AP", "Fiat Argentina"),
    ("93H", "Honda Brazil"),
    ("9BR", "Toyota Brazil"),
    ("9BW", "Volkswagen Brazil"),
    ("AAV", "Volkswagen South Africa"),
    ("ADM", "General Motors South Africa"),
    ("AFA", "Ford South Africa"),
    ("JA", "Isuzu"),
    ("JA3", "Mitsubishi"),
    ("JF", "Fuji Heavy Industries (Subaru)"),
    ("JHL", "Honda"),
    ("JHM", "Honda"),
    ("JM", "Mazda"),
    ("JN", "Nissan"),
    ("JS", "Suzuki"),
    ("JT", "Toyota"),
    ("JTH", "Lexus"),
    ("KL", "Daewoo General Motors South Korea"),
    ("KM", "Hyundai"),
    ("KMH", "Hyundai"),
    ("KN", "Kia"),
    ("KNA", "Kia"),
    ("KNM", "Renault Samsung"),
    ("L6T", "Geely"),
    ("LFV", "FAW-Volkswagen"),
    ("LSV", "SAIC Volkswagen"),
    ("LVS", "Changan Ford"),
    ("MA1", "Mahindra"),
    ("MAL", "Hyundai India"),
    ("MAT", "Tata"),
    ("NMT", "Toyota Turkey"),
    ("PL1", "Proton"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAR", "Rover"),
    ("SCC", "Lotus"),
    ("SCE", "DeLorean"),
    ("SCF", "Aston Martin"),
    ("SHH", "Honda UK"),
    ("SJN", "Nissan UK"),
    ("TMB", "Skoda"),
    ("TRU", "Audi Hungary"),
    ("TSM", "Suzuki Hungary"),
    ("UU", "Dacia"),
    ("VF1", "Renault"),
    ("VF3", "Peugeot"),
    ("VF7", "Citroen"),
    ("VSS", "SEAT"),
    ("VV9", "Tauro Sport Auto"),
    ("W0L", "Opel"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WDB", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WF0", "Ford Germany"),
    ("WMA", "MAN"),
    ("WME", "Smart"),
    ("WMW", "MINI"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche SUV"),
    ("WUA", "Quattro"),
    ("WVG", "Volkswagen SUV"),
    ("WVW", "Volkswagen"),
    ("XTA", "Lada"),
    ("YK1", "Saab"),
    ("YS3", "Saab"),
    ("YV1", "Volvo"),
    ("ZAM", "Maserati"),
    ("ZAR", "Alfa Romeo"),
    ("ZCF", "Iveco"),
    ("ZFA", "Fiat"),
    ("ZFF", "Ferrari"),
    ("ZHW", "Lamborghini"),
    ("ZLA", "Lancia"),
];
