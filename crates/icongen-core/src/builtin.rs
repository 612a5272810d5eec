//! Built-in icon catalogs.
//!
//! Two constant groups shipped with the tool, mainly used by tests and as a
//! reference for the catalog contract. Both groups are exposed with the same
//! visibility; consumers needing only one group simply ignore the other.

use std::sync::LazyLock;

use crate::catalog::IconCatalog;

const A_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAABmJLR0QA/wD/AP+gvaeTAAAAdElEQVQ4jc2SMQ6AIBAER5/gH/yMX7Lk4mstjNpQYQOBEDnRRrYhGcJwyR60mAXYgDlhLjvVWGDI2CuBA05AErZ6Xj3BBOwF+WMEOADzVfB/8jHVBvoKYaddlgSWWGP6c/UejMQaw6O7BSsKLLHGIBDPG8sFMJIiG6lj6G4AAAAASUVORK5CYII=";

const B_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAADAAAAAwCAYAAABXAvmHAAAABmJLR0QA/wD/AP+gvaeTAAAEXElEQVRoge2ZXYhVVRiGn+PfVIONNtnoZOiADYGhpSSDIogVQeCg4V8iSoTlEDJ0UYaIQwlKgzcKKih4Id0EqaFRSUQ6oFOao8mMmmERNUU5ln/l+Hf04jvb86199t5rrXP2zHgxL2zY7PV+73rXPmt/61vrQD/6URIyKWqNBmYBdcAzQBVQCdwBLgG/AaeBQ8AXwC8p9l00Mojpb4AsYtblyiIDWQAM7HXXOTwHtMYY9LlOAS/0pvEBwCrgZsjIDeBLYAUwFRgJDM7xq4ApwFvAHqCbwoFsAR7safNDgI9DHf8PNAPVHjqVwIfAfyGtVuDRFP0aGAR8Furwa2BsCZqjKHwhHcgAU8f2UEfNpPMBZoCVwC2l/S1QloL2PSzBNL86TfEc5gK3Mb+JVFANXFbC2xxixiDZJSn7XAPeD8WtVO1ZYGbp9mGnEj0JPOAQsyPBuL7+iYjV30QHksWKxpPkf9Yskh5tGI5kJpcBfBIR/0QofkEpA9ishHY7xrytYo6F2iaQX7GzwMQYjXVKo8XPch6DgS4lNM0hJgOcUTHLQu27VNuuBJ1K4Dr5gdb4GA/wvOrsnGPMTBVzEShXbRMx3/4Ei9ZepfVmHCnpA5mu7vdZOguwXN3vRFbaAGvIV7+7kYSQhK9ivDhDr7rzHPijkHooiBmv2vTcD5chTTF6UxXve3/7ksICgacd+KsV/2CorZFC88HVFaNXpTh/e3oHJEcHAsMt3IHAr4r/aqi9BtnMRA1gU4xmmeJ0+9s3K0Xb4lWvuOeJr2OeBa4qbksCd5Di3fAxHuCKEhhq4X5O4ZvtBtYqzuNAp2o/CzySoDlUcf/1ty+pMxAYZ+FeJHp6XMm1lyOLWvD8AlBr0axR/J/iSElptFPdj49lCTYSPU/P5fr4CJiUe3YTqTzPWjT14hW7DiUNQOdp2yrchGwHM5ildiuwHpitnjUghwA21Kn74w78ArxC/idsx/0IRq8fBzCnVLNH/0dU3IsecfdQjlkLzXKIySBZKOp72IN7aVyn4v5E6rKi0KSE2hyEaok2fwyzLkrCAOCwiv3A27VCJeZubL2Fv5RC878jKdQV76nYLmCYn+VCLFOCt4GXErhbMc1fBSZ79PUy5nnT60X4jcSnSvQScvYZhROYg53j0cckzMVzb7FmozAC+FmJdyIb9zB0+fGuh/4Y4A8V2wFUlOA3Ek8hK6guBcKnceuQEnmDh251TivQ/Ysid2AumI4chwSd/YjsA4rFY5hl+zXcDg5KQj3mxqUdmWK+GJGL1RVnfUoerZiDOYgf8DuUHYZZ3N0CFqbs0Yq5mCnvBG6HshXAUUzzi3rIoxXzMQfRRvLurQL4DjPVLu5hj1YsxTyUbQUejuCVIzuwgJcF3uglj1a8hjmIQ5i7uIeQElqbX859hgbMo5MWJJ/XIKcU2nxDH3m0YgX2fyvf6TN3jmjEnE76g23sQ19emAHsR0rxy8i/lzP61FE/+hGNu+hn25UO9GtIAAAAAElFTkSuQmCC";

const C_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAADAAAAAwCAYAAABXAvmHAAAABmJLR0QA/wD/AP+gvaeTAAACAklEQVRoge2YPUvDQBiAnxYXUcGqu1S7Se2vsCg4+jvcdbIWP1YXt/4AlQqu/oCqIC5uioOLUJCiOEitNA6X0Jhemku8XILkgZeS8vbyvLk3d2kgIyMjQyPjwC7wBHzZnzX7+9RTAG4ASxItUl5EAbhFLu9ELTG7AFTkLeAxKcFRqMpbQDchR1/CyKduBsLKW8BOIqYSosjfkJJVaBr/pdIv7oDZJGS9ZPJxsA98ek7cBY6AvJ0Tpedv7d/FSg74GCHRQFzBVMo77DE8A+7opFleRg44Jpy0u+dnzCsPE6WI1Mg7hCnCqHwFqAPXwAvQA9r28SGw5ModAx5GiBvt+RJwHiBjAX3gAigiVqFUyK8Bbwry7vj2HD96jjsYaps1iUzYaCDayTsjDQabXSyUCH/lZTNRtMfLS4pwxydiX9GGSs+rxIVrzKAiPnTJVxA3pI4C+vxenfKIZ6WuJ0/rDNQ1yTtxoEtMlWtN4k5cmdUXm1SQ1BYwAWwr5LbN6g/3pywm7dwphdzYXon4rcOvCr/dRBSxqZCrMp5WdN8DrbhE/WbgUvN5dI8XyDJ694GyWX1BM4KsLE5Mizss8vdnoQ6DZ6FEWEX8aYki3wOq5pWHqRL+7cI7sJ6ErB8LwBnBN3YfOMVg2+RC5peBDWAFmAfmEJvUM2KpbAL3OgUzMjL+OT+dHzNNm9YKggAAAABJRU5ErkJggg==";

const D_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAABgAAAAYCAYAAADgdz34AAAABmJLR0QA/wD/AP+gvaeTAAAAtklEQVRIie2UMRKCMBBFH4yNo8ehtKAUb+Nl7DwGtXcRj2AtFmycBSKwIYwWvJktMpu8n8lkFlb+iRNQAfXMqoDCFxBD7uruC3DNubQ8aQThIKEBB6AE9pZD355oB2RqnQNP2Xs2eLyNLXATYd6RX/G/gCkgFVEt4jG5OQAgAS6qPyQPCtAhY/LgAEQ85de1PJsJBxwvw94P+kaPzg1CC5qx06OgmSEx5tDRSROVugiLz6KV3/MGRE96J77NbmwAAAAASUVORK5CYII=";

/// Icons historically declared on the `SiblingIcons` class.
pub static SIBLING_ICONS: LazyLock<IconCatalog> = LazyLock::new(|| {
    IconCatalog::builder()
        .entry("AIcon", A_ICON)
        .build()
        .expect("builtin catalog entries are valid")
});

/// Icons historically declared on the `OtherIcons` class.
pub static OTHER_ICONS: LazyLock<IconCatalog> = LazyLock::new(|| {
    IconCatalog::builder()
        .entry("BIcon", B_ICON)
        .entry("CIcon", C_ICON)
        .entry("DIcon", D_ICON)
        .build()
        .expect("builtin catalog entries are valid")
});
