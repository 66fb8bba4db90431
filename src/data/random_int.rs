//! Random integer-order data for I_v(x).
//!
//! Generated offline with 50-digit arithmetic. Orders are integers in
//! 0..=100; arguments are log-uniform in [1e-3, 700] and exactly
//! representable as `f32`.

#![allow(clippy::excessive_precision)]

#[rustfmt::skip]
pub static BESSEL_I_INT_DATA: [[f64; 3]; 150] = [
    [0.0, 0.46638065576553345, 1.05512144501578600851218571760339910],
    [1.0, 0.08166875690221786, 0.0408684324836418759242709829387369526],
    [1.0, 482.4718933105469, 6.21895035837816306534265824807123001e207],
    [1.0, 633.0841064453125, 1.39590517589729262508029208145299784e273],
    [2.0, 0.06471292674541473, 0.000523653065715903040353973435127653888],
    [2.0, 0.0967637449502945, 0.00117131628781753285250420874795508036],
    [2.0, 0.13922829926013947, 0.00242698144857857504484100824998214976],
    [2.0, 3.54716157913208, 4.02586285010921760899098313844687546],
    [2.0, 8.578454971313477, 574.288010385670276891236666758261234],
    [2.0, 33.21128845214844, 17332233005138.9174196102137218305352],
    [4.0, 0.0018933978863060474, 3.34685120865264498134318232604068807e-14],
    [4.0, 60.12025451660156, 5806946664577811087224864.04182849702],
    [9.0, 8.862192153930664, 11.1798494796165114093682180658181893],
    [9.0, 41.299354553222656, 19996534765232630.9944997779737585122],
    [10.0, 13.26160717010498, 1516.83041000674756040776028506328891],
    [10.0, 14.386605262756348, 5924.28966344236997184548610637938596],
    [11.0, 5.286703586578369, 0.00195010233046103796688705374479044546],
    [11.0, 12.643945693969727, 324.547916398683667294127314274275162],
    [11.0, 101.8876953125, 3.87031473662760765227982140462164739e42],
    [13.0, 2.3989505767822266, 0.00000000189271964277843369919337185670806979],
    [14.0, 0.021811095997691154, 3.86064617953767334847837209121269455e-39],
    [14.0, 0.024069324135780334, 1.53345289230343396610295649834024392e-38],
    [14.0, 0.2779848575592041, 1.15352491628689828807666832571659518e-23],
    [14.0, 272.4017028808594, 3.38504968369395980696054633625421592e116],
    [15.0, 24.408464431762695, 33807105.5364118676896079704537929706],
    [16.0, 0.0011901765828952193, 1.18217808094007578793082769689022435e-65],
    [16.0, 0.01478250976651907, 3.79203786116711992019316204383183578e-48],
    [17.0, 0.05626562237739563, 1.21779396023047797771970881107779477e-41],
    [18.0, 0.02343393675982952, 2.70605587802296972779655778464297974e-51],
    [18.0, 27.519798278808594, 208761722.879395843419860264072128219],
    [19.0, 0.0022895662114024162, 1.07311540242334486239190024386492738e-73],
    [19.0, 0.008658447302877903, 1.01553807726178688769505563462579857e-62],
    [19.0, 69.7843246459961, 7283682410512674628047097611.14299909],
    [19.0, 314.6266784667969, 5.53785470045860402563889883697923733e134],
    [20.0, 174.20262145996094, 4.32951239293764966458821308549865078e73],
    [23.0, 0.3981752097606659, 2.92576800036132448311360639051843847e-39],
    [23.0, 612.8832397460938, 1.55439286597444110153337107725991778e264],
    [25.0, 0.001061712857335806, 8.58581154337200631806927295764858630e-108],
    [25.0, 0.31437188386917114, 5.24939877682909372762633871823845313e-46],
    [25.0, 111.32022094726562, 5.06252383447871572866769552467165000e45],
    [27.0, 15.044658660888672, 0.000297899503019182867719704290055077225],
    [28.0, 411.9586486816406, 6.18566677637499004086027696961586856e176],
    [29.0, 1.2461587190628052, 1.26135624382325325587651244959041346e-37],
    [30.0, 72.133056640625, 2041129964748309598876974193.38966682],
    [30.0, 146.15982055664062, 4.55281857748500692669644734586712229e60],
    [31.0, 253.6051025390625, 5.18676849357705782128642743147770183e107],
    [32.0, 2.042360544204712, 7.67048857454807386184402882642634805e-36],
    [32.0, 182.7049102783203, 3.98852872050044300772043686314445826e76],
    [33.0, 255.38302612304688, 2.41260914627204020092210497806325184e108],
    [34.0, 0.010873781517148018, 3.40217304840506670395610363193434677e-116],
    [34.0, 34.655731201171875, 10635690.1926509707508775379049929200],
    [35.0, 0.06366005539894104, 3.84658340422578877908567838528846885e-93],
    [36.0, 0.001136273262090981, 3.88835003709368558496022795253791832e-159],
    [36.0, 0.022227788344025612, 1.20406949806799006048118732933095781e-112],
    [36.0, 0.7951819896697998, 1.02573610137693567092447281606347636e-56],
    [36.0, 4.5503692626953125, 2.20146864775097445238322250851331679e-29],
    [37.0, 5.471993446350098, 1.31788343398447452876315545767654175e-27],
    [37.0, 273.5283508300781, 1.22269572889060002051639614311049447e116],
    [38.0, 0.03483664244413376, 2.75246707928340994547526350483840313e-112],
    [38.0, 0.3229447305202484, 1.54704068880070496433823008164293035e-75],
    [39.0, 0.0664186179637909, 1.04606968081882766288016598097028045e-104],
    [40.0, 0.002075743628665805, 5.42130272924643142484602247321367518e-168],
    [40.0, 0.01771261915564537, 9.51628257606464720585060466268400812e-131],
    [40.0, 12.060275077819824, 4.81567137154766556374855629812811681e-17],
    [40.0, 52.80235290527344, 2058977314547318.67344542323115686229],
    [43.0, 0.4722136855125427, 1.83261919518193677121218761652538524e-80],
    [44.0, 0.6557216644287109, 1.84832212141324309020274753800061764e-76],
    [44.0, 201.74105834960938, 9.61699483218834252780920211907955266e83],
    [45.0, 0.8531680703163147, 1.87980597943761721938459389933078946e-73],
    [47.0, 364.0856628417969, 1.32857284075705976733830734718439733e155],
    [48.0, 0.0042790500447154045, 5.77198262060802323358010723532763351e-190],
    [49.0, 0.2000114470720291, 1.64892141646242545950547643437524676e-112],
    [49.0, 198.1173553466797, 7.39721285778223195291156145165687905e81],
    [51.0, 119.9068603515625, 9.45693268762675139520207841597450479e45],
    [52.0, 0.006338849198073149, 1.39422785312994146447087632379055993e-198],
    [53.0, 135.75112915039062, 1.08830405832490407307213460977901914e53],
    [53.0, 410.5245666503906, 1.25129163977617515064405701080957502e175],
    [54.0, 0.23916247487068176, 6.77016457274547579054631274414348531e-122],
    [55.0, 0.05260835215449333, 9.94679847744960985443546677281045016e-161],
    [55.0, 0.9479306936264038, 1.15910785712593456433271009648229634e-91],
    [56.0, 204.0459747314453, 5.46467958141327802395026990048533230e83],
    [57.0, 11.71811580657959, 2.59546037289150403720319949988934624e-33],
    [57.0, 193.70376586914062, 9.04567323007598196978615530051843030e78],
    [58.0, 0.0013439173344522715, 4.11810009170768058623530569308866896e-263],
    [58.0, 251.03182983398438, 3.31245607098604595699319701005818899e104],
    [58.0, 306.4486389160156, 1.16509658811718859115781940774129883e129],
    [59.0, 7.873741149902344, 1.21294869546963262312526223018387669e-45],
    [60.0, 0.34916937351226807, 3.98484134390278729950850727077546511e-128],
    [60.0, 4.618276119232178, 8.40920345372534379097110719357361679e-61],
    [60.0, 94.14774322509766, 25927402088586562374525275564167.1898],
    [60.0, 371.0585021972656, 2.29077702490543323707459458160304021e157],
    [61.0, 0.08864326775074005, 5.47104831482033156160054921372230860e-167],
    [61.0, 5.100874900817871, 1.39160751118357345389834242091459191e-59],
    [62.0, 0.047360312193632126, 5.17547560854149085893933231524355341e-187],
    [62.0, 0.2076088786125183, 3.21784691195245297728081929772474678e-147],
    [64.0, 1.473251461982727, 2.53518111873177167256020073603587446e-98],
    [64.0, 6.1609296798706055, 1.70355301620014473903851357838411304e-58],
    [64.0, 28.29351806640625, 7.02047102048304863491970029060263531e-15],
    [64.0, 236.0950927734375, 1.57384706968513232965748764947141032e97],
    [65.0, 0.0012340534012764692, 2.84071064471232332499082926885912122e-300],
    [65.0, 497.8097229003906, 4.03925725758552610034184201128924934e212],
    [66.0, 0.3049411475658417, 2.26232391416558246100716691851085315e-147],
    [66.0, 0.8026698231697083, 1.24918825333765968213111955569905963e-119],
    [67.0, 29.77853012084961, 2.54033039529129577572098355828145901e-15],
    [68.0, 0.186196967959404, 3.11669323231871861319789918605006863e-167],
    [69.0, 70.39143371582031, 2640894966370457.25238900345171248492],
    [70.0, 4.564865589141846, 1.09977603378355907252707346652587407e-75],
    [71.0, 0.011435629799962044, 6.81825670364637753389960152383991546e-262],
    [71.0, 0.32598644495010376, 1.36312171387021406651083410912160716e-158],
    [72.0, 0.07129602134227753, 9.11073089591850720076616600976391175e-209],
    [74.0, 0.29154130816459656, 3.90985065091452643072011725212621421e-170],
    [74.0, 11.50906753540039, 8.17336388978128287681553366783078376e-52],
    [75.0, 0.025368239730596542, 2.23828047114891156802238041758551649e-252],
    [75.0, 1.2227457761764526, 3.80616217924167361807623844163586220e-126],
    [76.0, 0.00993271078914404, 4.20191453653663688046471196191561397e-287],
    [76.0, 71.05870819091797, 12372366132178.2316644841169705721906],
    [77.0, 57.34379196166992, 2385.25341265998948910849116015826579],
    [78.0, 25.09796142578125, 3.10967451320365861131326396609272649e-29],
    [79.0, 0.6075138449668884, 1.47377674493969233762443034162806336e-158],
    [79.0, 2.531965494155884, 1.40882479077620111952526968272364007e-109],
    [80.0, 365.3285217285156, 1.53347264014934613218502046227338511e153],
    [81.0, 604.0591430664062, 1.55969881638975665451264439876348617e258],
    [82.0, 0.08338052779436111, 1.46495176302468135604826387449625753e-236],
    [82.0, 2.910008430480957, 4.88559732097165501143915553898525242e-110],
    [82.0, 119.66902923583984, 5.15469736886259050880503806122735588e38],
    [83.0, 3.774282455444336, 2.06095584574134872076815031635731199e-102],
    [83.0, 114.93831634521484, 832816818071708870274363104093715104.],
    [83.0, 180.57086181640625, 5.31941398350381265184065260899510862e68],
    [85.0, 2.163811445236206, 2.89873301222585374959403818274147731e-126],
    [86.0, 0.29083073139190674, 3.98373087272098364745103920789601549e-203],
    [86.0, 11.274127960205078, 2.31499960329326530101572682869427742e-66],
    [86.0, 13.166731834411621, 1.65184922593279071687337700058410151e-60],
    [86.0, 344.50238037109375, 2.01040271701194973282785857235282300e143],
    [87.0, 214.41995239257812, 9.44837036009847074361078947283995117e83],
    [89.0, 103.6965560913086, 6722993989602795731365593611.54158580],
    [90.0, 0.23218607902526855, 4.57809608317239097102326870306765858e-223],
    [91.0, 606.4087524414062, 4.04927032706114062403648147238238948e258],
    [92.0, 60.66790771484375, 0.0218748300426847066876186975947176349],
    [92.0, 65.2350082397461, 70.5564424108535525479125889311276520],
    [94.0, 0.5182940363883972, 6.87504447393675092530630704494725254e-202],
    [95.0, 0.09299879521131516, 2.47403819493450565049487871775072017e-275],
    [95.0, 53.03422927856445, 0.000000000196040870697890143849741549439007593],
    [95.0, 90.74848937988281, 765663621124087130.454866097326573943],
    [97.0, 0.18551141023635864, 7.06215055952854951014877677912942306e-253],
    [97.0, 6.483592987060547, 4.07026344698835677000283790117332392e-103],
    [97.0, 77.64846801757812, 253671537.730615224233361575403911211],
    [97.0, 269.9649353027344, 1.33901010529533570827974524202347876e108],
    [98.0, 0.9012320041656494, 1.25767980678183387075333879148298329e-188],
    [100.0, 3.688048839569092, 4.18102126483527327026109855110197621e-132],
    [100.0, 11.60311222076416, 3.38016903732497460716476182296192310e-82],
];
