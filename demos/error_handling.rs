use vinparse::*;

fn main() {
    let inputs = [
        "",
        "0000O000I000Q0000",
        "1HGCM82643A004352",
        "00000000000000000",
        "WZZ00000000000000",
    ];

    for input in inputs {
        match get_info(input) {
            Ok(vin) => println!("{input}: ok ({})", vin.manufacturer()),
            Err(VinError::IncorrectLength { length }) => {
                println!("{input:?}: wrong length ({length} characters)");
            }
            Err(VinError::InvalidCharacters(chars)) => {
                println!("{input}: invalid characters {chars:?}");
            }
            Err(VinError::Checksum(ChecksumError { expected, received })) => {
                println!("{input}: check digit is '{received}', should be '{expected}'");
            }
            Err(e) => println!("{input}: {e}"),
        }
    }

    // The check digit can also be verified or computed on its own
    match check_digit("1HGCM82643A004352") {
        Ok(digit) => println!("check digit for 1HGCM82643A004352 should be {digit}"),
        Err(e) => println!("cannot compute check digit: {e}"),
    }

    let lenient = DecodeOptions::new().checksum(ChecksumPolicy::Never);
    if let Ok(vin) = get_info_with("1HGCM82643A004352", &lenient) {
        println!("decoded without check digit: {}", vin.manufacturer());
    }
}
