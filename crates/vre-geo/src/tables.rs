//! Compiled-in lookup data.
//!
//! States and territories are complete; the county and place tables hold
//! the entries bundled with the crate (jurisdictions typically load their
//! full tables with [`crate::GeoRegistry::from_csv_dir`]).

/// (name, two-letter code)
pub(crate) const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("American Samoa", "AS"),
    ("Guam", "GU"),
    ("Northern Mariana Islands", "MP"),
    ("Puerto Rico", "PR"),
    ("Virgin Islands", "VI"),
];

/// (name, two-letter code)
pub(crate) const COUNTRIES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("Canada", "CA"),
    ("Mexico", "MX"),
    ("United Kingdom", "GB"),
    ("Ireland", "IE"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Portugal", "PT"),
    ("Poland", "PL"),
    ("Ukraine", "UA"),
    ("Russia", "RU"),
    ("China", "CN"),
    ("Japan", "JP"),
    ("South Korea", "KR"),
    ("India", "IN"),
    ("Philippines", "PH"),
    ("Vietnam", "VN"),
    ("Brazil", "BR"),
    ("Colombia", "CO"),
    ("Cuba", "CU"),
    ("Dominican Republic", "DO"),
    ("Haiti", "HT"),
    ("Guatemala", "GT"),
    ("El Salvador", "SV"),
    ("Honduras", "HN"),
    ("Jamaica", "JM"),
    ("Nigeria", "NG"),
    ("Ethiopia", "ET"),
    ("Australia", "AU"),
];

/// (state code, county code, county name)
pub(crate) const COUNTIES: &[(&str, &str, &str)] = &[
    ("MA", "009", "Essex"),
    ("MA", "017", "Middlesex"),
    ("MA", "021", "Norfolk"),
    ("MA", "025", "Suffolk"),
    ("MA", "027", "Worcester"),
    ("VT", "007", "Chittenden"),
    ("NY", "061", "New York"),
    ("NY", "047", "Kings"),
    ("CA", "037", "Los Angeles"),
    ("CA", "075", "San Francisco"),
    ("AK", "020", "Anchorage"),
];

/// (state code, county code, place code, place name)
pub(crate) const PLACES: &[(&str, &str, &str, &str)] = &[
    ("MA", "017", "11000", "Cambridge"),
    ("MA", "017", "62500", "Somerville"),
    ("MA", "025", "07000", "Boston"),
    ("MA", "027", "82000", "Worcester"),
    ("VT", "007", "10675", "Burlington"),
    ("NY", "061", "51000", "New York"),
    ("CA", "037", "44000", "Los Angeles"),
    ("CA", "075", "67000", "San Francisco"),
    ("AK", "020", "03000", "Anchorage"),
];
